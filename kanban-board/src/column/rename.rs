//! RenameColumn command

use crate::error::{KanbanError, Result};
use crate::ids::IdGenerator;
use crate::operation::{operation, Transition, TransitionResult};
use crate::types::{Board, Column, ColumnId};
use serde::{Deserialize, Serialize};

/// Change a column's title
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenameColumn {
    /// The column ID to rename
    pub id: ColumnId,
    /// New column title
    pub title: String,
}

operation!(
    RenameColumn,
    verb = "rename",
    noun = "column",
    description = "Change a column's title"
);

impl RenameColumn {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Transition for RenameColumn {
    type Output = Column;

    fn apply(&self, board: &Board, _ids: &mut dyn IdGenerator) -> Result<TransitionResult<Column>> {
        let column = board
            .find_column(self.id.as_str())
            .ok_or_else(|| KanbanError::column_not_found(&self.id))?;

        if column.title == self.title {
            return Ok(TransitionResult::Unchanged {
                value: column.clone(),
            });
        }

        let mut next = board.clone();
        let renamed = Column {
            title: self.title.clone(),
            ..column.clone()
        };
        next.columns.insert(renamed.id.clone(), renamed.clone());

        Ok(TransitionResult::Changed {
            board: next,
            value: renamed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;

    #[test]
    fn test_rename_column() {
        let next = RenameColumn::new("column-3", "Erledigt")
            .apply(&Board::seed(), &mut SequentialIdGenerator::new())
            .unwrap()
            .split()
            .0
            .unwrap();

        assert_eq!(next.columns["column-3"].title, "Erledigt");
        // position in the map and in the order is preserved
        assert_eq!(next.columns.get_index_of("column-3"), Some(2));
        assert_eq!(next.column_order, Board::seed().column_order);
    }

    #[test]
    fn test_rename_missing_column() {
        let result = RenameColumn::new("column-9", "Nope")
            .apply(&Board::seed(), &mut SequentialIdGenerator::new());

        assert!(matches!(result, Err(KanbanError::ColumnNotFound { .. })));
    }
}
