//! RemoveTask command

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::operation::{operation, Transition, TransitionResult};
use crate::types::{Board, ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Delete a task and unlink it from its column
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoveTask {
    /// The task ID to delete
    pub id: TaskId,
    /// The column listing the task
    pub column: ColumnId,
}

operation!(
    RemoveTask,
    verb = "remove",
    noun = "task",
    description = "Delete a task"
);

/// What a removal actually did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Removed {
    /// The task entry was deleted
    pub task: bool,
    /// The id was dropped from a column's list
    pub unlinked: bool,
}

impl RemoveTask {
    pub fn new(id: impl Into<TaskId>, column: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            column: column.into(),
        }
    }
}

impl Transition for RemoveTask {
    type Output = Removed;

    fn apply(&self, board: &Board, _ids: &mut dyn IdGenerator) -> Result<TransitionResult<Removed>> {
        let task = board.tasks.contains_key(&self.id);
        let listed = board
            .find_column(self.column.as_str())
            .is_some_and(|c| c.contains(self.id.as_str()));

        // Idempotent: nothing to delete leaves the board alone
        if !task && !listed {
            return Ok(TransitionResult::Unchanged {
                value: Removed::default(),
            });
        }

        let mut next = board.clone();
        next.tasks.shift_remove(&self.id);
        if let Some(column) = next.columns.get_mut(&self.column) {
            column.task_ids.retain(|id| id != &self.id);
        }
        if !listed {
            // A stale column argument must not leave the id behind in its real owner
            for column in next.columns.values_mut() {
                column.task_ids.retain(|id| id != &self.id);
            }
        }

        let removed = Removed {
            task,
            unlinked: listed || board.column_of(self.id.as_str()).is_some(),
        };

        Ok(TransitionResult::Changed {
            board: next,
            value: removed,
        })
    }
}
