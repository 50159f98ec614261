//! EditTask command

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::operation::{operation, Transition, TransitionResult};
use crate::types::{Board, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Replace the content of a task
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditTask {
    /// The task ID to edit
    pub id: TaskId,
    /// New task content
    pub content: String,
}

operation!(
    EditTask,
    verb = "edit",
    noun = "task",
    description = "Replace a task's content"
);

impl EditTask {
    pub fn new(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

impl Transition for EditTask {
    /// The edited task, or `None` when no task has that id
    type Output = Option<Task>;

    fn apply(
        &self,
        board: &Board,
        _ids: &mut dyn IdGenerator,
    ) -> Result<TransitionResult<Option<Task>>> {
        let Some(task) = board.find_task(self.id.as_str()) else {
            tracing::debug!(task = %self.id, "edit of missing task ignored");
            return Ok(TransitionResult::Unchanged { value: None });
        };

        if task.content == self.content {
            return Ok(TransitionResult::Unchanged {
                value: Some(task.clone()),
            });
        }

        let edited = Task::new(task.id.clone(), self.content.clone());
        let mut next = board.clone();
        next.tasks.insert(edited.id.clone(), edited.clone());

        Ok(TransitionResult::Changed {
            board: next,
            value: Some(edited),
        })
    }
}
