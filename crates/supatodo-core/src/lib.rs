//! Supatodo Core
//!
//! Layered like the UI expects it:
//! - domain: identities, sessions and todo rows
//! - backend: collaborator traits plus the Supabase implementation
//! - gate / board: the login form and todo list state machines

pub mod backend;
pub mod board;
pub mod config;
pub mod domain;
pub mod error;
pub mod gate;


pub use backend::{AuthService, SupabaseClient, TodoStore};
pub use config::BackendConfig;
pub use error::{BackendError, BackendResult, ConfigError};
