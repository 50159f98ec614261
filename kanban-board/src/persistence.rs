//! Persistence collaborator: a key-value store plus the board snapshot codec
//!
//! The board is stored as one JSON document under one key. The document is the
//! board itself (`tasks`, `columns`, `columnOrder`) with a `version` tag and a
//! `savedAt` timestamp added. Documents without a version are read as version 1.
//!
//! Loading never fails: a missing, unreadable or malformed value falls back to
//! the seed board. A malformed document is kept until the first save, which
//! copies it to a backup key before replacing it.

use crate::defaults::DEFAULT_STORAGE_KEY;
use crate::error::{KanbanError, Result};
use crate::store::BoardObserver;
use crate::types::Board;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Snapshot format version written by this build
pub const SNAPSHOT_VERSION: u32 = 1;

/// Named string values that survive across sessions
pub trait KeyValueStore {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    /// Directory holding the value files
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at the given directory. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path to the file holding a key's value. Keys are used as file names
    /// verbatim, so anything but ASCII letters, digits, `-` and `_` is rejected.
    pub fn value_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

/// Check that a key can be stored by every [`KeyValueStore`] in this crate
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(KanbanError::InvalidKey {
            key: key.to_string(),
        })
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(&self.value_path(key)?, value.as_bytes())
    }
}

/// In-memory store. Clones share the same storage, like handles to one
/// browser storage area.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Check whether a key has been written
    pub fn contains(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// On-disk shape of a stored board
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardSnapshot {
    #[serde(default = "unversioned")]
    version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    board: Board,
}

fn unversioned() -> u32 {
    1
}

/// Serialize a board into the stored document format
pub fn encode_board(board: &Board) -> Result<String> {
    let snapshot = BoardSnapshot {
        version: SNAPSHOT_VERSION,
        saved_at: Some(Utc::now()),
        board: board.clone(),
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Parse a stored document back into a board.
///
/// Dangling task references are pruned; any other broken invariant, or an
/// unknown version, is an error.
pub fn decode_board(content: &str) -> Result<Board> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let version = match value.get("version") {
        None => unversioned(),
        Some(v) => v
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| KanbanError::corrupt(format!("invalid version tag: {v}")))?,
    };
    if version != SNAPSHOT_VERSION {
        return Err(KanbanError::UnsupportedVersion { version });
    }

    let snapshot: BoardSnapshot = serde_json::from_value(value)?;
    let mut board = snapshot.board;

    let broken: Vec<String> = board
        .check_integrity()
        .into_iter()
        .filter(|v| !v.is_repairable())
        .map(|v| v.to_string())
        .collect();
    if !broken.is_empty() {
        return Err(KanbanError::corrupt(broken.join("; ")));
    }

    let pruned = board.prune_dangling();
    if pruned > 0 {
        tracing::warn!(pruned, "dropped task references with no matching task");
    }

    Ok(board)
}

/// Where a loaded board came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Read from the persistence store
    Stored,
    /// Nothing stored yet
    Seed,
    /// Stored value could not be used
    Fallback { reason: String },
    /// Handed to the store directly, persistence was not consulted
    Provided,
}

/// A board plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedBoard {
    pub board: Board,
    pub source: LoadSource,
}

/// Reads and writes the board under one key of a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct BoardPersistence<S> {
    store: S,
    key: String,
    /// Unreadable document to move aside before the first save replaces it
    unreadable: Option<String>,
}

impl<S: KeyValueStore> BoardPersistence<S> {
    /// Persist under the default key
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: DEFAULT_STORAGE_KEY.to_string(),
            unreadable: None,
        }
    }

    /// Use a different key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Key an unreadable document is moved to before it is overwritten
    pub fn backup_key(&self) -> String {
        format!("{}-unreadable", self.key)
    }

    /// Read the stored board, `Ok(None)` if nothing is stored
    pub fn load(&self) -> Result<Option<Board>> {
        match self.store.get(&self.key)? {
            Some(content) => decode_board(&content).map(Some),
            None => Ok(None),
        }
    }

    /// Read the stored board, degrading to the seed board on any failure.
    ///
    /// Nothing is written here. A document that could be read but not decoded
    /// is remembered and copied to [`Self::backup_key`] by the next save.
    pub fn load_or_seed(&mut self) -> LoadedBoard {
        let content = match self.store.get(&self.key) {
            Ok(Some(content)) => content,
            Ok(None) => {
                tracing::info!(key = %self.key, "no stored board, starting from seed");
                return LoadedBoard {
                    board: Board::seed(),
                    source: LoadSource::Seed,
                };
            }
            Err(e) => return self.fallback(e),
        };

        match decode_board(&content) {
            Ok(board) => {
                tracing::info!(key = %self.key, tasks = board.tasks.len(), "restored board");
                LoadedBoard {
                    board,
                    source: LoadSource::Stored,
                }
            }
            Err(e) => {
                self.unreadable = Some(content);
                self.fallback(e)
            }
        }
    }

    fn fallback(&self, error: KanbanError) -> LoadedBoard {
        tracing::warn!(key = %self.key, %error, "stored board unusable, starting from seed");
        LoadedBoard {
            board: Board::seed(),
            source: LoadSource::Fallback {
                reason: error.to_string(),
            },
        }
    }

    /// Write the full board
    pub fn save(&mut self, board: &Board) -> Result<()> {
        if let Some(content) = self.unreadable.take() {
            let backup = self.backup_key();
            if let Err(e) = self.store.set(&backup, &content) {
                self.unreadable = Some(content);
                return Err(e);
            }
            tracing::warn!(key = %self.key, %backup, "moved unreadable board aside");
        }
        let content = encode_board(board)?;
        self.store.set(&self.key, &content)
    }
}

impl<S: KeyValueStore> BoardObserver for BoardPersistence<S> {
    fn board_changed(&mut self, board: &Board) -> Result<()> {
        self.save(board)
    }
}

/// Write a file atomically via temp file + rename
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Write to temp file in same directory
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path)?;

    Ok(())
}
