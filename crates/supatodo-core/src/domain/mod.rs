//! Domain Layer
//!
//! Plain data carried between the auth service, the todo table and the UI.
//! Only serde-level knowledge of the wire format lives here.

mod identity;
mod todo;

pub use identity::{Identity, Profile, Session};
pub use todo::{NewTodo, TodoId, TodoItem, TodoPatch};
