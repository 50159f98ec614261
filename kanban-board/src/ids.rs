//! Fresh id generation for new tasks and columns
//!
//! Generators receive the current board so they can guarantee the id they
//! hand out is not already taken.

use crate::types::{Board, ColumnId, TaskId};
use ulid::Ulid;

/// Source of fresh, collision-free entity ids
pub trait IdGenerator {
    /// An id not used by any task in `board`
    fn next_task_id(&mut self, board: &Board) -> TaskId;

    /// An id not used by any column in `board`
    fn next_column_id(&mut self, board: &Board) -> ColumnId;
}

/// Random ids of the form `task-<ulid>` / `column-<ulid>`
#[derive(Debug, Default, Clone, Copy)]
pub struct UlidIdGenerator;

impl UlidIdGenerator {
    pub fn new() -> Self {
        Self
    }

    fn fresh(prefix: &str) -> String {
        format!("{}-{}", prefix, Ulid::new().to_string().to_lowercase())
    }
}

impl IdGenerator for UlidIdGenerator {
    fn next_task_id(&mut self, board: &Board) -> TaskId {
        loop {
            let id = TaskId::from_string(Self::fresh("task"));
            if !board.tasks.contains_key(&id) {
                return id;
            }
        }
    }

    fn next_column_id(&mut self, board: &Board) -> ColumnId {
        loop {
            let id = ColumnId::from_string(Self::fresh("column"));
            if !board.columns.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Deterministic ids of the form `task-N` / `column-N`.
///
/// Each call returns the smallest N at or above the cursor whose id is free,
/// then moves the cursor past it, so ids are never reused within one
/// generator even after the entity is deleted.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next_task: u64,
    next_column: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self {
            next_task: 1,
            next_column: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_task_id(&mut self, board: &Board) -> TaskId {
        loop {
            let id = TaskId::from_string(format!("task-{}", self.next_task));
            self.next_task += 1;
            if !board.tasks.contains_key(&id) {
                return id;
            }
        }
    }

    fn next_column_id(&mut self, board: &Board) -> ColumnId {
        loop {
            let id = ColumnId::from_string(format!("column-{}", self.next_column));
            self.next_column += 1;
            if !board.columns.contains_key(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_skips_taken_ids() {
        let board = Board::seed();
        let mut ids = SequentialIdGenerator::new();

        assert_eq!(ids.next_task_id(&board), "task-4");
        assert_eq!(ids.next_task_id(&board), "task-5");
        assert_eq!(ids.next_column_id(&board), "column-4");
    }

    #[test]
    fn test_sequential_on_empty_board() {
        let mut ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_column_id(&Board::new()), "column-1");
    }

    #[test]
    fn test_ulid_ids_are_unique_and_prefixed() {
        let board = Board::new();
        let mut ids = UlidIdGenerator::new();
        let generated: HashSet<TaskId> = (0..100).map(|_| ids.next_task_id(&board)).collect();

        assert_eq!(generated.len(), 100);
        assert!(generated.iter().all(|id| id.as_str().starts_with("task-")));
        assert!(ids.next_column_id(&board).as_str().starts_with("column-"));
    }
}
