//! AddTask command

use crate::error::{KanbanError, Result};
use crate::ids::IdGenerator;
use crate::operation::{operation, Transition, TransitionResult};
use crate::types::{Board, ColumnId, Task};
use serde::{Deserialize, Serialize};

/// Add a new task to the end of a column
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddTask {
    /// The task content
    pub content: String,
    /// The column the task goes into
    pub column: ColumnId,
}

operation!(
    AddTask,
    verb = "add",
    noun = "task",
    description = "Create a new task at the end of a column"
);

impl AddTask {
    /// Create a new AddTask command
    pub fn new(content: impl Into<String>, column: impl Into<ColumnId>) -> Self {
        Self {
            content: content.into(),
            column: column.into(),
        }
    }
}

impl Transition for AddTask {
    type Output = Task;

    fn apply(&self, board: &Board, ids: &mut dyn IdGenerator) -> Result<TransitionResult<Task>> {
        if !board.columns.contains_key(&self.column) {
            return Err(KanbanError::column_not_found(&self.column));
        }

        let task = Task::new(ids.next_task_id(board), self.content.clone());

        let mut next = board.clone();
        next.tasks.insert(task.id.clone(), task.clone());
        if let Some(column) = next.columns.get_mut(&self.column) {
            column.task_ids.push(task.id.clone());
        }

        Ok(TransitionResult::Changed {
            board: next,
            value: task,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;
    use crate::operation::Operation;

    #[test]
    fn test_add_task() {
        let board = Board::seed();
        let mut ids = SequentialIdGenerator::new();

        let (next, task) = AddTask::new("Milch kaufen", "column-3")
            .apply(&board, &mut ids)
            .unwrap()
            .split();
        let next = next.unwrap();

        assert_eq!(task.id, "task-4");
        assert_eq!(next.tasks["task-4"].content, "Milch kaufen");
        assert_eq!(next.columns["column-3"].task_ids, ["task-4"]);
        assert!(next.is_consistent());
        // input snapshot untouched
        assert_eq!(board, Board::seed());
    }

    #[test]
    fn test_add_task_appends_to_end() {
        let board = Board::seed();
        let mut ids = SequentialIdGenerator::new();

        let next = AddTask::new("Later", "column-1")
            .apply(&board, &mut ids)
            .unwrap()
            .split()
            .0
            .unwrap();

        assert_eq!(next.columns["column-1"].task_ids, ["task-1", "task-2", "task-4"]);
    }

    #[test]
    fn test_add_task_unknown_column() {
        let mut ids = SequentialIdGenerator::new();
        let result = AddTask::new("Task", "nonexistent").apply(&Board::seed(), &mut ids);
        assert!(matches!(result, Err(KanbanError::ColumnNotFound { .. })));
    }

    #[test]
    fn test_op_string() {
        assert_eq!(AddTask::new("x", "c").op_string(), "add task");
    }
}
