//! UI Components
//!
//! Screens and rows of the todo client.

mod config_missing;
mod dashboard;
mod login_prompt;
mod session_gate;
mod todo_form;
mod todo_row;

pub use config_missing::ConfigMissing;
pub use dashboard::Dashboard;
pub use login_prompt::LoginPrompt;
pub use session_gate::SessionGate;
pub use todo_form::TodoForm;
pub use todo_row::TodoRow;
