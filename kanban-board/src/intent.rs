//! User intents
//!
//! The thin layer between a UI and the [`BoardStore`]. Intents normalize
//! raw input (trimming, rejecting blanks), ask for confirmation before
//! destructive changes, and then apply the matching transition.

use crate::board::ResetBoard;
use crate::column::{AddColumn, ColumnRemoved, RemoveColumn, RenameColumn};
use crate::dnd::{ColumnDropTarget, DragSource, TaskDragSource};
use crate::error::{KanbanError, Result};
use crate::store::BoardStore;
use crate::task::{AddTask, EditTask, Moved, RemoveTask, Removed};
use crate::types::{Column, ColumnId, Task, TaskId};

/// Prompt shown before deleting a task
pub const CONFIRM_DELETE_TASK: &str = "Delete task?";

/// Prompt shown before resetting the board
pub const CONFIRM_RESET_BOARD: &str = "Reset the board? All changes will be lost!";

/// Prompt shown before deleting a column
pub fn confirm_delete_column(title: &str) -> String {
    format!("Delete column \"{title}\"? All tasks will be deleted!")
}

/// Asks the user to confirm a destructive action
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Accepts every prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

/// Declines every prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        false
    }
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Result of an intent that may be declined
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome<T> {
    Done(T),
    Declined,
}

impl<T> IntentOutcome<T> {
    pub fn is_declined(&self) -> bool {
        matches!(self, Self::Declined)
    }

    pub fn done(self) -> Option<T> {
        match self {
            Self::Done(value) => Some(value),
            Self::Declined => None,
        }
    }
}

/// Binds a store to a confirmation prompt
pub struct BoardIntents<'a, C> {
    store: &'a mut BoardStore,
    confirm: C,
}

impl<'a, C: Confirm> BoardIntents<'a, C> {
    pub fn new(store: &'a mut BoardStore, confirm: C) -> Self {
        Self { store, confirm }
    }

    /// Access the store
    pub fn store(&self) -> &BoardStore {
        self.store
    }

    /// Add a task to the end of a column. Blank content is rejected.
    pub fn add_task(&mut self, column: impl Into<ColumnId>, content: &str) -> Result<Task> {
        let content = required(content, "task content")?;
        self.store.apply(&AddTask::new(content, column))
    }

    /// Replace a task's content. Blank content is rejected.
    pub fn edit_task(&mut self, id: impl Into<TaskId>, content: &str) -> Result<Option<Task>> {
        let content = required(content, "task content")?;
        self.store.apply(&EditTask::new(id, content))
    }

    /// Delete a task after confirmation
    pub fn remove_task(
        &mut self,
        id: impl Into<TaskId>,
        column: impl Into<ColumnId>,
    ) -> Result<IntentOutcome<Removed>> {
        if !self.confirm.confirm(CONFIRM_DELETE_TASK) {
            tracing::debug!("task deletion declined");
            return Ok(IntentOutcome::Declined);
        }
        self.store
            .apply(&RemoveTask::new(id, column))
            .map(IntentOutcome::Done)
    }

    /// Append a column. Blank titles are rejected.
    pub fn add_column(&mut self, title: &str) -> Result<Column> {
        let title = required(title, "column title")?;
        self.store.apply(&AddColumn::new(title))
    }

    /// Rename a column. Blank titles are rejected.
    pub fn rename_column(&mut self, id: impl Into<ColumnId>, title: &str) -> Result<Column> {
        let title = required(title, "column title")?;
        self.store.apply(&RenameColumn::new(id, title))
    }

    /// Delete a column and its tasks after confirmation.
    ///
    /// A column that does not exist is not worth a prompt.
    pub fn remove_column(&mut self, id: impl Into<ColumnId>) -> Result<IntentOutcome<ColumnRemoved>> {
        let id = id.into();
        let Some(column) = self.store.snapshot().find_column(id.as_str()) else {
            return Ok(IntentOutcome::Done(ColumnRemoved::default()));
        };

        let message = confirm_delete_column(&column.title);
        if !self.confirm.confirm(&message) {
            tracing::debug!(column = %id, "column deletion declined");
            return Ok(IntentOutcome::Declined);
        }
        self.store.apply(&RemoveColumn::new(id)).map(IntentOutcome::Done)
    }

    /// Move a task as if it were dragged from `from` and dropped on `to`.
    ///
    /// Returns `None` when source and target are the same column.
    pub fn move_task(
        &mut self,
        id: impl Into<TaskId>,
        from: impl Into<ColumnId>,
        to: impl Into<ColumnId>,
    ) -> Result<Option<Moved>> {
        let mut payload = TaskDragSource::new(id, from).drag_start();
        self.store.drop_task(&ColumnDropTarget::new(to), &mut payload)
    }

    /// Replace the board with the seed dataset after confirmation.
    ///
    /// Returns how many tasks were discarded.
    pub fn reset_board(&mut self) -> Result<IntentOutcome<usize>> {
        if !self.confirm.confirm(CONFIRM_RESET_BOARD) {
            return Ok(IntentOutcome::Declined);
        }
        self.store.apply(&ResetBoard).map(IntentOutcome::Done)
    }
}

fn required<'s>(value: &'s str, field: &'static str) -> Result<&'s str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(KanbanError::empty_input(field));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;
    use crate::types::Board;
    use std::sync::Arc;

    fn store() -> BoardStore {
        BoardStore::init().with_id_generator(SequentialIdGenerator::new())
    }

    #[test]
    fn test_add_task_trims_content() {
        let mut store = store();
        let task = BoardIntents::new(&mut store, AlwaysConfirm)
            .add_task("column-3", "  Milch kaufen ")
            .unwrap();

        assert_eq!(task.content, "Milch kaufen");
        assert_eq!(store.snapshot().columns["column-3"].task_ids, [task.id]);
    }

    #[test]
    fn test_blank_task_is_rejected() {
        let mut store = store();
        let before = store.board();

        let result = BoardIntents::new(&mut store, AlwaysConfirm).add_task("column-1", "");
        assert!(matches!(result, Err(KanbanError::EmptyInput { .. })));

        let result = BoardIntents::new(&mut store, AlwaysConfirm).add_task("column-1", "   ");
        assert!(matches!(result, Err(KanbanError::EmptyInput { .. })));

        assert!(Arc::ptr_eq(&before, &store.board()));
    }

    #[test]
    fn test_blank_edit_is_rejected() {
        let mut store = store();
        let result = BoardIntents::new(&mut store, AlwaysConfirm).edit_task("task-1", "\t");

        assert!(result.unwrap_err().is_validation());
        assert_eq!(store.snapshot().tasks["task-1"].content, "Brot kaufen");
    }

    #[test]
    fn test_declined_task_removal() {
        let mut store = store();
        let mut prompts = Vec::new();

        let outcome = BoardIntents::new(&mut store, |message: &str| {
            prompts.push(message.to_string());
            false
        })
        .remove_task("task-1", "column-1")
        .unwrap();

        assert!(outcome.is_declined());
        assert_eq!(prompts, ["Delete task?"]);
        assert_eq!(*store.snapshot(), Board::seed());
    }

    #[test]
    fn test_confirmed_task_removal() {
        let mut store = store();
        let outcome = BoardIntents::new(&mut store, AlwaysConfirm)
            .remove_task("task-1", "column-1")
            .unwrap();

        assert_eq!(
            outcome.done(),
            Some(Removed {
                task: true,
                unlinked: true
            })
        );
        assert_eq!(store.snapshot().columns["column-1"].task_ids, ["task-2"]);
    }

    #[test]
    fn test_column_removal_prompt_names_column() {
        let mut store = store();
        let mut prompts = Vec::new();

        let outcome = BoardIntents::new(&mut store, |message: &str| {
            prompts.push(message.to_string());
            true
        })
        .remove_column("column-1")
        .unwrap();

        assert_eq!(
            prompts,
            ["Delete column \"To Do\"? All tasks will be deleted!"]
        );
        assert_eq!(outcome.done().unwrap().tasks, ["task-1", "task-2"]);
        assert_eq!(store.snapshot().tasks.len(), 1);
    }

    #[test]
    fn test_declined_column_removal() {
        let mut store = store();
        let outcome = BoardIntents::new(&mut store, NeverConfirm)
            .remove_column("column-1")
            .unwrap();

        assert!(outcome.is_declined());
        assert_eq!(*store.snapshot(), Board::seed());
    }

    #[test]
    fn test_missing_column_removal_skips_prompt() {
        let mut store = store();
        let outcome = BoardIntents::new(&mut store, |_: &str| -> bool {
            panic!("no prompt expected")
        })
        .remove_column("column-9")
        .unwrap();

        assert_eq!(outcome, IntentOutcome::Done(ColumnRemoved::default()));
    }

    #[test]
    fn test_add_and_rename_column() {
        let mut store = store();
        let mut intents = BoardIntents::new(&mut store, AlwaysConfirm);

        let column = intents.add_column(" Review ").unwrap();
        assert_eq!(column.title, "Review");
        assert_eq!(column.id, "column-4");

        let renamed = intents.rename_column("column-4", "QA").unwrap();
        assert_eq!(renamed.title, "QA");
        assert!(intents.rename_column("column-4", " ").is_err());
        assert_eq!(intents.store().snapshot().columns["column-4"].title, "QA");
    }

    #[test]
    fn test_move_task_intent() {
        let mut store = store();
        let mut intents = BoardIntents::new(&mut store, AlwaysConfirm);

        assert!(intents.move_task("task-1", "column-1", "column-1").unwrap().is_none());
        let moved = intents
            .move_task("task-1", "column-1", "column-3")
            .unwrap()
            .unwrap();

        assert_eq!(moved.index, Some(0));
        assert_eq!(store.snapshot().columns["column-3"].task_ids, ["task-1"]);
    }

    #[test]
    fn test_reset_board() {
        let mut store = store();
        let mut intents = BoardIntents::new(&mut store, AlwaysConfirm);
        intents.add_task("column-1", "Milch kaufen").unwrap();

        assert_eq!(intents.reset_board().unwrap(), IntentOutcome::Done(4));
        assert_eq!(*store.snapshot(), Board::seed());

        let declined = BoardIntents::new(&mut store, NeverConfirm)
            .reset_board()
            .unwrap();
        assert!(declined.is_declined());
    }
}
