//! AddColumn command

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::operation::{operation, Transition, TransitionResult};
use crate::types::{Board, Column};
use serde::{Deserialize, Serialize};

/// Add a new, empty column at the right end of the board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddColumn {
    /// The column display title
    pub title: String,
}

operation!(
    AddColumn,
    verb = "add",
    noun = "column",
    description = "Add a new column to the board"
);

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Transition for AddColumn {
    type Output = Column;

    fn apply(&self, board: &Board, ids: &mut dyn IdGenerator) -> Result<TransitionResult<Column>> {
        let column = Column::new(ids.next_column_id(board), self.title.clone());

        let mut next = board.clone();
        next.columns.insert(column.id.clone(), column.clone());
        next.column_order.push(column.id.clone());

        Ok(TransitionResult::Changed {
            board: next,
            value: column,
        })
    }
}
