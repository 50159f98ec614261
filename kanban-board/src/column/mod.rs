//! Column commands

mod add;
mod remove;
mod rename;

pub use add::AddColumn;
pub use remove::{ColumnRemoved, RemoveColumn};
pub use rename::RenameColumn;
