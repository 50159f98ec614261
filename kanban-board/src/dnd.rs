//! Drag-and-drop wiring
//!
//! The gesture engine lives in the host UI. This module only describes what a
//! drag carries and what a drop does with it, so any toolkit can plug in:
//! a [`DragSource`] produces a [`DragPayload`] when a drag starts, and a
//! [`DropTarget`] turns a payload into a [`MoveTask`].

use crate::error::Result;
use crate::task::{MoveTask, Moved};
use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// What a dragged task carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub task_id: TaskId,
    pub source_column_id: ColumnId,
}

/// Something the user can pick up
pub trait DragSource {
    fn drag_start(&self) -> DragPayload;
}

/// A task card sitting in a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDragSource {
    pub task_id: TaskId,
    pub column_id: ColumnId,
}

impl TaskDragSource {
    pub fn new(task_id: impl Into<TaskId>, column_id: impl Into<ColumnId>) -> Self {
        Self {
            task_id: task_id.into(),
            column_id: column_id.into(),
        }
    }
}

impl DragSource for TaskDragSource {
    fn drag_start(&self) -> DragPayload {
        DragPayload {
            task_id: self.task_id.clone(),
            source_column_id: self.column_id.clone(),
        }
    }
}

/// Something a payload can be dropped on
pub trait DropTarget {
    /// The column a drop here moves tasks into
    fn column_id(&self) -> &ColumnId;

    /// Whether a drop of this payload would do anything
    fn accepts(&self, payload: &DragPayload) -> bool {
        payload.source_column_id != *self.column_id()
    }

    /// Handle a drop by invoking `mover` with the resulting move.
    ///
    /// After a successful move the payload's source is rewritten to this
    /// column, so a repeated drop callback for the same gesture is ignored.
    fn on_drop(
        &self,
        payload: &mut DragPayload,
        mover: &mut dyn FnMut(&MoveTask) -> Result<Moved>,
    ) -> Result<Option<Moved>> {
        if !self.accepts(payload) {
            return Ok(None);
        }

        let moved = mover(&MoveTask::new(
            payload.task_id.clone(),
            payload.source_column_id.clone(),
            self.column_id().clone(),
        ))?;
        payload.source_column_id = self.column_id().clone();
        Ok(Some(moved))
    }
}

/// A column accepting dropped tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDropTarget {
    column_id: ColumnId,
}

impl ColumnDropTarget {
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
        }
    }
}

impl DropTarget for ColumnDropTarget {
    fn column_id(&self) -> &ColumnId {
        &self.column_id
    }
}
