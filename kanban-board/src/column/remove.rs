//! RemoveColumn command

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::operation::{operation, Transition, TransitionResult};
use crate::types::{Board, ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Delete a column together with every task it holds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoveColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

operation!(
    RemoveColumn,
    verb = "remove",
    noun = "column",
    description = "Delete a column and all of its tasks"
);

/// The column that went away and the tasks deleted with it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnRemoved {
    pub removed: bool,
    pub tasks: Vec<TaskId>,
}

impl RemoveColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Transition for RemoveColumn {
    type Output = ColumnRemoved;

    fn apply(
        &self,
        board: &Board,
        _ids: &mut dyn IdGenerator,
    ) -> Result<TransitionResult<ColumnRemoved>> {
        let Some(column) = board.find_column(self.id.as_str()) else {
            tracing::debug!(column = %self.id, "removal of missing column ignored");
            return Ok(TransitionResult::Unchanged {
                value: ColumnRemoved::default(),
            });
        };

        let mut next = board.clone();
        next.columns.shift_remove(&self.id);
        next.column_order.retain(|id| id != &self.id);

        // Cascade: exactly the tasks this column owned
        for task_id in &column.task_ids {
            next.tasks.shift_remove(task_id);
        }

        Ok(TransitionResult::Changed {
            board: next,
            value: ColumnRemoved {
                removed: true,
                tasks: column.task_ids.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;

    #[test]
    fn test_remove_column_cascades_its_tasks() {
        let board = Board::seed();

        let (next, removed) = RemoveColumn::new("column-2")
            .apply(&board, &mut SequentialIdGenerator::new())
            .unwrap()
            .split();
        let next = next.unwrap();

        assert_eq!(removed.tasks, ["task-3"]);
        assert!(next.find_task("task-3").is_none());
        assert!(next.find_column("column-2").is_none());
        assert_eq!(next.column_order, ["column-1", "column-3"]);

        // everything else untouched
        assert_eq!(next.tasks.len(), 2);
        assert_eq!(next.columns["column-1"], board.columns["column-1"]);
        assert_eq!(next.columns["column-3"], board.columns["column-3"]);
        assert_eq!(next.tasks["task-1"], board.tasks["task-1"]);
        assert!(next.is_consistent());
    }

    #[test]
    fn test_remove_empty_column() {
        let next = RemoveColumn::new("column-3")
            .apply(&Board::seed(), &mut SequentialIdGenerator::new())
            .unwrap()
            .split()
            .0
            .unwrap();

        assert_eq!(next.tasks.len(), 3);
        assert_eq!(next.column_order, ["column-1", "column-2"]);
    }

    #[test]
    fn test_remove_missing_column_is_noop() {
        let result = RemoveColumn::new("column-9")
            .apply(&Board::seed(), &mut SequentialIdGenerator::new())
            .unwrap();

        assert!(!result.is_changed());
        assert!(!result.into_value().removed);
    }
}
