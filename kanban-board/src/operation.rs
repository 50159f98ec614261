//! Operation metadata and the transition trait
//!
//! Operations are structs where the fields ARE the parameters. Each one names
//! itself with a verb and a noun (`"move task"`) and maps a board snapshot to
//! the next one without touching its input.
//!
//! ```
//! use kanban_board::{Board, Transition, SequentialIdGenerator, task::MoveTask};
//!
//! let board = Board::seed();
//! let mut ids = SequentialIdGenerator::new();
//! let result = MoveTask::new("task-2", "column-1", "column-2")
//!     .apply(&board, &mut ids)
//!     .unwrap();
//! assert!(result.is_changed());
//! ```

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::types::Board;
use serde::Serialize;

/// Metadata every board operation carries
pub trait Operation {
    /// The action, e.g. `"add"`
    fn verb(&self) -> &'static str;

    /// The entity acted upon, e.g. `"task"`
    fn noun(&self) -> &'static str;

    /// One-line human description
    fn description(&self) -> &'static str;

    /// Canonical op string (e.g., "add task", "move task")
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// A pure function from one board snapshot (plus arguments) to the next
pub trait Transition: Operation {
    /// What the caller gets back besides the new board
    type Output: Serialize;

    /// Compute the next snapshot. The input board is never modified; on error
    /// the caller keeps its current state.
    fn apply(
        &self,
        board: &Board,
        ids: &mut dyn IdGenerator,
    ) -> Result<TransitionResult<Self::Output>>;
}

/// Result of applying a transition
///
/// Distinguishes between:
/// - Changed: a new snapshot replaces the current one and observers are notified
/// - Unchanged: the board stays as it is (no-ops and read-only operations)
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionResult<T> {
    /// The board changed
    Changed { board: Board, value: T },
    /// Nothing changed
    Unchanged { value: T },
}

impl<T> TransitionResult<T> {
    /// Extract the value
    pub fn into_value(self) -> T {
        match self {
            Self::Changed { value, .. } => value,
            Self::Unchanged { value } => value,
        }
    }

    /// Get the new board (if any) and the value separately
    pub fn split(self) -> (Option<Board>, T) {
        match self {
            Self::Changed { board, value } => (Some(board), value),
            Self::Unchanged { value } => (None, value),
        }
    }

    /// The new board, if the transition produced one
    pub fn board(&self) -> Option<&Board> {
        match self {
            Self::Changed { board, .. } => Some(board),
            Self::Unchanged { .. } => None,
        }
    }

    /// Check if this replaced the board
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Implement [`Operation`] for a command struct
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal) => {
        impl $crate::operation::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $desc
            }
        }
    };
}

pub(crate) use operation;
