//! BoardStore - the single owner of the current board snapshot
//!
//! Every change goes through [`BoardStore::apply`], which runs a pure
//! [`Transition`] against the current snapshot and, when the transition
//! produced a new board, swaps it in and notifies observers. Snapshots are
//! shared as `Arc<Board>` and never mutated after they are published.

use crate::board::BoardView;
use crate::dnd::{DragPayload, DropTarget};
use crate::error::{KanbanError, Result};
use crate::ids::{IdGenerator, UlidIdGenerator};
use crate::operation::Transition;
use crate::persistence::{BoardPersistence, KeyValueStore, LoadSource};
use crate::task::Moved;
use crate::types::Board;
use std::sync::Arc;
use std::time::Instant;

/// Receives every new board snapshot
pub trait BoardObserver {
    fn board_changed(&mut self, board: &Board) -> Result<()>;
}

impl<F> BoardObserver for F
where
    F: FnMut(&Board) -> Result<()>,
{
    fn board_changed(&mut self, board: &Board) -> Result<()> {
        self(board)
    }
}

/// Handle returned by [`BoardStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the board and applies transitions to it
pub struct BoardStore {
    board: Arc<Board>,
    ids: Box<dyn IdGenerator>,
    observers: Vec<(SubscriptionId, Box<dyn BoardObserver>)>,
    next_subscription: u64,
    observer_errors: Vec<KanbanError>,
    source: LoadSource,
}

impl BoardStore {
    /// Create a store around an existing board
    pub fn new(board: Board) -> Self {
        Self {
            board: Arc::new(board),
            ids: Box::new(UlidIdGenerator::new()),
            observers: Vec::new(),
            next_subscription: 0,
            observer_errors: Vec::new(),
            source: LoadSource::Provided,
        }
    }

    /// Create a store holding the seed board
    pub fn init() -> Self {
        let mut store = Self::new(Board::seed());
        store.source = LoadSource::Seed;
        store
    }

    /// Restore the board from persistence (seed on absence or failure) and
    /// keep persisting every change back to it.
    ///
    /// Only a freshly seeded board is written right away. A stored board is
    /// not rewritten until it changes, and an unusable stored value stays in
    /// place until the first change moves it aside.
    pub fn load<S>(mut persistence: BoardPersistence<S>) -> Self
    where
        S: KeyValueStore + 'static,
    {
        let loaded = persistence.load_or_seed();
        let mut store = Self::new(loaded.board);
        store.source = loaded.source;
        store.subscribe(persistence);
        if store.source == LoadSource::Seed {
            store.notify();
        }
        store
    }

    /// Use a different id generator
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// The current snapshot
    pub fn board(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    /// Borrow the current snapshot
    pub fn snapshot(&self) -> &Board {
        &self.board
    }

    /// Where the initial board came from
    pub fn source(&self) -> &LoadSource {
        &self.source
    }

    /// Render-ready view of the current snapshot
    pub fn view(&self) -> BoardView {
        BoardView::from_board(&self.board)
    }

    /// Register an observer; it sees every snapshot published from now on
    pub fn subscribe(&mut self, observer: impl BoardObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Apply a transition to the current board.
    ///
    /// On error the board is unchanged. On success a changed board replaces
    /// the current one before observers run, so an observer failure does not
    /// undo the change; failures are queued for [`Self::take_observer_errors`].
    pub fn apply<T: Transition>(&mut self, op: &T) -> Result<T::Output> {
        let start = Instant::now();
        let op_string = op.op_string();

        let result = match op.apply(&self.board, self.ids.as_mut()) {
            Ok(result) => result,
            Err(error) => {
                tracing::debug!(op = %op_string, %error, "transition rejected");
                return Err(error);
            }
        };

        let (board, value) = result.split();
        let changed = board.is_some();
        if let Some(board) = board {
            self.board = Arc::new(board);
            self.notify();
        }

        tracing::debug!(
            op = %op_string,
            changed,
            duration_us = start.elapsed().as_micros() as u64,
            "transition applied"
        );
        Ok(value)
    }

    /// Deliver a drag payload to a drop target, moving the task if the target accepts it
    pub fn drop_task(
        &mut self,
        target: &dyn DropTarget,
        payload: &mut DragPayload,
    ) -> Result<Option<Moved>> {
        target.on_drop(payload, &mut |cmd| self.apply(cmd))
    }

    /// Drain the errors observers reported since the last call
    pub fn take_observer_errors(&mut self) -> Vec<KanbanError> {
        std::mem::take(&mut self.observer_errors)
    }

    fn notify(&mut self) {
        for (id, observer) in &mut self.observers {
            if let Err(error) = observer.board_changed(&self.board) {
                tracing::error!(subscription = id.0, %error, "board observer failed");
                self.observer_errors.push(error);
            }
        }
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::init()
    }
}

impl std::fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardStore")
            .field("board", &self.board)
            .field("observers", &self.observers.len())
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{AddColumn, RemoveColumn};
    use crate::ids::SequentialIdGenerator;
    use crate::persistence::{decode_board, encode_board, MemoryKeyValueStore};
    use crate::task::{AddTask, EditTask, MoveTask};
    use crate::DEFAULT_STORAGE_KEY;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store() -> BoardStore {
        BoardStore::init().with_id_generator(SequentialIdGenerator::new())
    }

    #[test]
    fn test_apply_replaces_snapshot() {
        let mut store = store();
        let before = store.board();

        let task = store.apply(&AddTask::new("Milch kaufen", "column-3")).unwrap();

        assert_eq!(task.id, "task-4");
        assert_eq!(*before, Board::seed());
        assert_eq!(store.snapshot().columns["column-3"].task_ids, ["task-4"]);
    }

    #[test]
    fn test_noop_keeps_same_snapshot() {
        let mut store = store();
        let before = store.board();

        store
            .apply(&MoveTask::new("task-1", "column-1", "column-1"))
            .unwrap();

        assert!(Arc::ptr_eq(&before, &store.board()));
    }

    #[test]
    fn test_failed_transition_leaves_board() {
        let mut store = store();
        let before = store.board();

        let result = store.apply(&MoveTask::new("task-1", "column-1", "column-9"));

        assert!(matches!(result, Err(KanbanError::ColumnNotFound { .. })));
        assert!(Arc::ptr_eq(&before, &store.board()));
    }

    #[test]
    fn test_observers_see_changes_only() {
        let seen: Rc<RefCell<Vec<Board>>> = Rc::default();
        let mut store = store();
        let sink = Rc::clone(&seen);
        store.subscribe(move |board: &Board| -> Result<()> {
            sink.borrow_mut().push(board.clone());
            Ok(())
        });

        store.apply(&AddColumn::new("Review")).unwrap();
        store.apply(&EditTask::new("task-404", "nothing")).unwrap();
        store.apply(&RemoveColumn::new("column-4")).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].column_order.len(), 4);
        assert_eq!(seen[1], Board::seed());
    }

    #[test]
    fn test_unsubscribe() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = store();
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_: &Board| -> Result<()> {
            *counter.borrow_mut() += 1;
            Ok(())
        });

        store.apply(&AddColumn::new("A")).unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.apply(&AddColumn::new("B")).unwrap();

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_observer_failure_is_queued_not_rolled_back() {
        let mut store = store();
        store.subscribe(|_: &Board| -> Result<()> { Err(KanbanError::corrupt("disk full")) });

        store.apply(&AddColumn::new("Review")).unwrap();

        assert_eq!(store.snapshot().column_order.len(), 4);
        let errors = store.take_observer_errors();
        assert_eq!(errors.len(), 1);
        assert!(store.take_observer_errors().is_empty());
    }

    #[test]
    fn test_load_persists_every_change() {
        let kv = MemoryKeyValueStore::new();
        let mut store = BoardStore::load(BoardPersistence::new(kv.clone()))
            .with_id_generator(SequentialIdGenerator::new());

        assert_eq!(store.source(), &LoadSource::Seed);
        // the seed is written back immediately
        assert!(kv.contains(DEFAULT_STORAGE_KEY));

        store
            .apply(&MoveTask::new("task-2", "column-1", "column-2"))
            .unwrap();

        let stored = decode_board(&kv.get(DEFAULT_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(&stored, store.snapshot());

        let reopened = BoardStore::load(BoardPersistence::new(kv));
        assert_eq!(reopened.source(), &LoadSource::Stored);
        assert_eq!(reopened.snapshot(), store.snapshot());
    }

    #[test]
    fn test_new_reports_provided_board() {
        assert_eq!(BoardStore::new(Board::seed()).source(), &LoadSource::Provided);
        assert_eq!(BoardStore::init().source(), &LoadSource::Seed);
    }

    #[test]
    fn test_load_does_not_rewrite_stored_board() {
        let doc = encode_board(&Board::seed()).unwrap();
        let kv = MemoryKeyValueStore::new().with_value(DEFAULT_STORAGE_KEY, doc.clone());

        let store = BoardStore::load(BoardPersistence::new(kv.clone()));

        assert_eq!(store.source(), &LoadSource::Stored);
        assert_eq!(kv.get(DEFAULT_STORAGE_KEY).unwrap(), Some(doc));
    }

    #[test]
    fn test_load_keeps_document_from_newer_version() {
        let doc = r#"{"version": 2, "tasks": {"task-1": {"id": "task-1", "content": "precious"}}}"#;
        let kv = MemoryKeyValueStore::new().with_value(DEFAULT_STORAGE_KEY, doc);

        let mut store = BoardStore::load(BoardPersistence::new(kv.clone()))
            .with_id_generator(SequentialIdGenerator::new());

        assert!(matches!(store.source(), LoadSource::Fallback { .. }));
        assert_eq!(store.snapshot(), &Board::seed());
        assert_eq!(kv.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(), Some(doc));
        assert!(store.take_observer_errors().is_empty());

        store.apply(&AddColumn::new("Review")).unwrap();

        assert_eq!(kv.get("kanbanData-unreadable").unwrap().as_deref(), Some(doc));
        let stored = decode_board(&kv.get(DEFAULT_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(&stored, store.snapshot());
    }
}
