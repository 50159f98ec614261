//! ResetBoard command

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::operation::{operation, Transition, TransitionResult};
use crate::types::Board;
use serde::{Deserialize, Serialize};

/// Replace the whole board with the seed dataset
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ResetBoard;

operation!(
    ResetBoard,
    verb = "reset",
    noun = "board",
    description = "Replace the board with the seed dataset"
);

impl Transition for ResetBoard {
    /// Number of tasks that were discarded
    type Output = usize;

    fn apply(&self, board: &Board, _ids: &mut dyn IdGenerator) -> Result<TransitionResult<usize>> {
        let seed = Board::seed();
        if *board == seed {
            return Ok(TransitionResult::Unchanged { value: 0 });
        }

        Ok(TransitionResult::Changed {
            board: seed,
            value: board.tasks.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::RemoveColumn;
    use crate::ids::SequentialIdGenerator;

    #[test]
    fn test_reset_restores_seed() {
        let mut ids = SequentialIdGenerator::new();
        let emptied = RemoveColumn::new("column-1")
            .apply(&Board::seed(), &mut ids)
            .unwrap()
            .split()
            .0
            .unwrap();

        let (next, discarded) = ResetBoard.apply(&emptied, &mut ids).unwrap().split();

        assert_eq!(next, Some(Board::seed()));
        assert_eq!(discarded, 1);
    }

    #[test]
    fn test_reset_of_seed_is_noop() {
        let result = ResetBoard
            .apply(&Board::seed(), &mut SequentialIdGenerator::new())
            .unwrap();
        assert!(!result.is_changed());
    }
}
