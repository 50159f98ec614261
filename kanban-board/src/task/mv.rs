//! MoveTask command

use crate::error::{KanbanError, Result};
use crate::ids::IdGenerator;
use crate::operation::{operation, Transition, TransitionResult};
use crate::types::{Board, ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Move a task from one column to the end of another
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// The column the task currently sits in
    pub from: ColumnId,
    /// The destination column
    pub to: ColumnId,
}

operation!(
    MoveTask,
    verb = "move",
    noun = "task",
    description = "Move a task to the end of a different column"
);

/// Where the task ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Moved {
    pub id: TaskId,
    pub column: ColumnId,
    /// Index of the task within its column after the move, `None` when a
    /// same-column move names a task that is not in that column
    pub index: Option<usize>,
}

impl MoveTask {
    /// Create a new MoveTask command
    pub fn new(id: impl Into<TaskId>, from: impl Into<ColumnId>, to: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Transition for MoveTask {
    type Output = Moved;

    fn apply(&self, board: &Board, _ids: &mut dyn IdGenerator) -> Result<TransitionResult<Moved>> {
        // Dropping a task back onto its own column never changes anything
        if self.from == self.to {
            let index = board
                .find_column(self.from.as_str())
                .and_then(|c| c.task_ids.iter().position(|id| id == &self.id));
            return Ok(TransitionResult::Unchanged {
                value: Moved {
                    id: self.id.clone(),
                    column: self.to.clone(),
                    index,
                },
            });
        }

        let from = board
            .find_column(self.from.as_str())
            .ok_or_else(|| KanbanError::column_not_found(&self.from))?;
        if !board.columns.contains_key(&self.to) {
            return Err(KanbanError::column_not_found(&self.to));
        }
        if !board.tasks.contains_key(&self.id) {
            return Err(KanbanError::task_not_found(&self.id));
        }
        if !from.contains(self.id.as_str()) {
            return Err(KanbanError::TaskNotInColumn {
                task: self.id.to_string(),
                column: self.from.to_string(),
            });
        }

        let mut next = board.clone();
        if let Some(column) = next.columns.get_mut(&self.from) {
            column.task_ids.retain(|id| id != &self.id);
        }
        let index = next.columns.get_mut(&self.to).map(|column| {
            column.task_ids.push(self.id.clone());
            column.task_ids.len() - 1
        });

        Ok(TransitionResult::Changed {
            board: next,
            value: Moved {
                id: self.id.clone(),
                column: self.to.clone(),
                index,
            },
        })
    }
}
