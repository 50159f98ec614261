//! GetBoard command

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::operation::{operation, Transition, TransitionResult};
use crate::types::{Board, ColumnId, Task};
use serde::{Deserialize, Serialize};

/// Resolve the board into display order with tasks inlined
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct GetBoard;

operation!(
    GetBoard,
    verb = "get",
    noun = "board",
    description = "Retrieve the board with columns in display order and their tasks"
);

/// Read model handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
    pub task_count: usize,
}

/// One column with its tasks resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl BoardView {
    /// Build the view. Ids without a matching entity are skipped, so a board
    /// with transient dangling references still renders.
    pub fn from_board(board: &Board) -> Self {
        let columns: Vec<ColumnView> = board
            .ordered_columns()
            .map(|column| ColumnView {
                id: column.id.clone(),
                title: column.title.clone(),
                tasks: column
                    .task_ids
                    .iter()
                    .filter_map(|id| board.tasks.get(id))
                    .cloned()
                    .collect(),
            })
            .collect();
        let task_count = columns.iter().map(|c| c.tasks.len()).sum();

        Self {
            columns,
            task_count,
        }
    }

    /// Find a column by id
    pub fn column(&self, id: &str) -> Option<&ColumnView> {
        self.columns.iter().find(|c| c.id == id)
    }
}

impl Transition for GetBoard {
    type Output = BoardView;

    fn apply(&self, board: &Board, _ids: &mut dyn IdGenerator) -> Result<TransitionResult<BoardView>> {
        Ok(TransitionResult::Unchanged {
            value: BoardView::from_board(board),
        })
    }
}
