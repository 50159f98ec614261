//! Board commands

mod get;
mod reset;

pub use get::{BoardView, ColumnView, GetBoard};
pub use reset::ResetBoard;
