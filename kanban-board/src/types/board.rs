//! Board-level types: Board, Column

use super::ids::{ColumnId, TaskId};
use super::task::Task;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The kanban board: normalized tasks and columns plus the column display order.
///
/// Maps keep insertion order so serialized boards read the way they were built;
/// equality ignores that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub tasks: IndexMap<TaskId, Task>,
    pub columns: IndexMap<ColumnId, Column>,
    pub column_order: Vec<ColumnId>,
}

/// A column defines a workflow stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub task_ids: Vec<TaskId>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    /// Set the task list
    pub fn with_tasks<I, T>(mut self, task_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        self.task_ids = task_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether the column lists the given task
    pub fn contains(&self, task_id: &str) -> bool {
        self.task_ids.iter().any(|id| id == task_id)
    }
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a task by ID
    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Find a column by ID
    pub fn find_column(&self, id: &str) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Columns in display order. Ids without a column entry are skipped.
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order.iter().filter_map(|id| self.columns.get(id))
    }

    /// The column whose task list contains the given task
    pub fn column_of(&self, task_id: &str) -> Option<&Column> {
        self.ordered_columns().find(|c| c.contains(task_id))
    }

    /// Remove task ids that have no entry in `tasks`, returning how many were dropped
    pub fn prune_dangling(&mut self) -> usize {
        let tasks = &self.tasks;
        let mut pruned = 0;
        for column in self.columns.values_mut() {
            let before = column.task_ids.len();
            column.task_ids.retain(|id| tasks.contains_key(id));
            pruned += before - column.task_ids.len();
        }
        pruned
    }

    /// Collect every invariant violation in the board
    pub fn check_integrity(&self) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();

        for (key, task) in &self.tasks {
            if key != &task.id {
                violations.push(IntegrityViolation::MismatchedTaskKey {
                    key: key.clone(),
                    id: task.id.clone(),
                });
            }
        }

        let mut owners: HashMap<&TaskId, &ColumnId> = HashMap::new();
        for (key, column) in &self.columns {
            if key != &column.id {
                violations.push(IntegrityViolation::MismatchedColumnKey {
                    key: key.clone(),
                    id: column.id.clone(),
                });
            }
            for task_id in &column.task_ids {
                if !self.tasks.contains_key(task_id) {
                    violations.push(IntegrityViolation::DanglingTask {
                        column: key.clone(),
                        task: task_id.clone(),
                    });
                }
                if let Some(first) = owners.insert(task_id, key) {
                    violations.push(IntegrityViolation::SharedTask {
                        task: task_id.clone(),
                        first: first.clone(),
                        second: key.clone(),
                    });
                }
            }
        }

        let mut seen: HashMap<&ColumnId, usize> = HashMap::new();
        for id in &self.column_order {
            *seen.entry(id).or_default() += 1;
            if !self.columns.contains_key(id) {
                violations.push(IntegrityViolation::UnknownColumn { column: id.clone() });
            }
        }
        for (id, count) in &seen {
            if *count > 1 {
                violations.push(IntegrityViolation::DuplicateColumn {
                    column: (*id).clone(),
                });
            }
        }
        for key in self.columns.keys() {
            if !seen.contains_key(key) {
                violations.push(IntegrityViolation::UnorderedColumn {
                    column: key.clone(),
                });
            }
        }

        violations
    }

    /// True when the board satisfies every invariant
    pub fn is_consistent(&self) -> bool {
        self.check_integrity().is_empty()
    }
}

/// A broken board invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// A column lists a task that does not exist
    DanglingTask { column: ColumnId, task: TaskId },
    /// A task is listed more than once across all columns
    SharedTask {
        task: TaskId,
        first: ColumnId,
        second: ColumnId,
    },
    /// `column_order` names a column that does not exist
    UnknownColumn { column: ColumnId },
    /// A column exists but is missing from `column_order`
    UnorderedColumn { column: ColumnId },
    /// `column_order` names the same column twice
    DuplicateColumn { column: ColumnId },
    /// A task is stored under a key different from its id
    MismatchedTaskKey { key: TaskId, id: TaskId },
    /// A column is stored under a key different from its id
    MismatchedColumnKey { key: ColumnId, id: ColumnId },
}

impl IntegrityViolation {
    /// Dangling references are tolerated at read time and can be pruned;
    /// everything else means the structure itself is broken.
    pub fn is_repairable(&self) -> bool {
        matches!(self, Self::DanglingTask { .. })
    }
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingTask { column, task } => {
                write!(f, "column '{column}' lists missing task '{task}'")
            }
            Self::SharedTask {
                task,
                first,
                second,
            } => write!(f, "task '{task}' listed in both '{first}' and '{second}'"),
            Self::UnknownColumn { column } => {
                write!(f, "column order names missing column '{column}'")
            }
            Self::UnorderedColumn { column } => {
                write!(f, "column '{column}' is missing from the column order")
            }
            Self::DuplicateColumn { column } => {
                write!(f, "column '{column}' appears more than once in the column order")
            }
            Self::MismatchedTaskKey { key, id } => {
                write!(f, "task stored under '{key}' has id '{id}'")
            }
            Self::MismatchedColumnKey { key, id } => {
                write!(f, "column stored under '{key}' has id '{id}'")
            }
        }
    }
}
