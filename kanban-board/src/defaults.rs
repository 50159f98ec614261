//! Built-in seed board.
//!
//! A fresh install, or a store whose persisted value is missing or unreadable,
//! starts from this dataset.

use crate::types::{Board, Column, ColumnId, Task, TaskId};

/// Persistence key the board is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "kanbanData";

const SEED_TASKS: [(&str, &str); 3] = [
    ("task-1", "Brot kaufen"),
    ("task-2", "React lernen"),
    ("task-3", "Fahrrad reparieren"),
];

const SEED_COLUMNS: [(&str, &str, &[&str]); 3] = [
    ("column-1", "To Do", &["task-1", "task-2"]),
    ("column-2", "In Progress", &["task-3"]),
    ("column-3", "Done", &[]),
];

impl Board {
    /// The fixed seed dataset: three tasks spread over "To Do", "In Progress" and "Done"
    pub fn seed() -> Self {
        let mut board = Board::new();

        for (id, content) in SEED_TASKS {
            board.tasks.insert(TaskId::from(id), Task::new(id, content));
        }

        for (id, title, task_ids) in SEED_COLUMNS {
            board.columns.insert(
                ColumnId::from(id),
                Column::new(id, title).with_tasks(task_ids.iter().copied()),
            );
            board.column_order.push(ColumnId::from(id));
        }

        board
    }
}
