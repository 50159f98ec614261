//! Kanban board engine with pluggable persistence
//!
//! This crate provides a single kanban board: ordered columns holding ordered
//! tasks. Every change is a pure transition from one board snapshot to the
//! next, applied through a [`BoardStore`] that publishes snapshots to
//! observers such as [`BoardPersistence`].
//!
//! ## Overview
//!
//! - **Normalized state** - Tasks and columns live in id-keyed maps; columns list task ids
//! - **Pure transitions** - Operations never mutate their input snapshot
//! - **Copy-on-write** - Unchanged boards keep the same `Arc`, so no-ops cost nothing
//! - **Durable** - The whole board is saved as one JSON document after every change
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use kanban_board::{BoardIntents, BoardPersistence, BoardStore, AlwaysConfirm, FileKeyValueStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let persistence = BoardPersistence::new(FileKeyValueStore::new("/path/to/data"));
//! let mut store = BoardStore::load(persistence);
//!
//! let mut intents = BoardIntents::new(&mut store, AlwaysConfirm);
//! let task = intents.add_task("column-1", "Implement feature X")?;
//! intents.move_task(task.id.clone(), "column-1", "column-2")?;
//!
//! for column in store.view().columns {
//!     println!("{}: {} tasks", column.title, column.tasks.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Stored Document
//!
//! ```text
//! {
//!   "version": 1,
//!   "savedAt": "2024-05-01T12:00:00Z",
//!   "tasks":   { "task-1": { "id": "task-1", "content": "Brot kaufen" } },
//!   "columns": { "column-1": { "id": "column-1", "title": "To Do", "taskIds": ["task-1"] } },
//!   "columnOrder": ["column-1"]
//! }
//! ```

pub mod defaults;
pub mod dnd;
mod error;
pub mod ids;
pub mod intent;
pub mod operation;
pub mod persistence;
mod store;
pub mod types;

// Command modules
pub mod board;
pub mod column;
pub mod task;

pub use defaults::DEFAULT_STORAGE_KEY;
pub use dnd::{ColumnDropTarget, DragPayload, DragSource, DropTarget, TaskDragSource};
pub use error::{KanbanError, Result};
pub use ids::{IdGenerator, SequentialIdGenerator, UlidIdGenerator};
pub use intent::{AlwaysConfirm, BoardIntents, Confirm, IntentOutcome, NeverConfirm};
pub use operation::{Operation, Transition, TransitionResult};
pub use persistence::{
    BoardPersistence, FileKeyValueStore, KeyValueStore, LoadSource, LoadedBoard,
    validate_key, MemoryKeyValueStore,
};
pub use store::{BoardObserver, BoardStore, SubscriptionId};

// Re-export commonly used types
pub use types::{Board, Column, ColumnId, IntegrityViolation, Task, TaskId};
