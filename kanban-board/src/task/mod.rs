//! Task commands

mod add;
mod edit;
mod mv;
mod remove;

pub use add::AddTask;
pub use edit::EditTask;
pub use mv::{MoveTask, Moved};
pub use remove::{RemoveTask, Removed};
