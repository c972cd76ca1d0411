//! Handoff cell for the human player's pending selection.
//!
//! The presentation layer writes, the match controller reads. A selection
//! is consumed exactly once; writing again before it is read replaces it.

use crate::Cell;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::trace;

/// Single-writer, single-reader slot holding at most one selection.
#[derive(Debug, Default)]
pub struct SelectionSlot {
    pending: Mutex<Option<Cell>>,
    ready: Condvar,
}

impl SelectionSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `cell`, replacing any unconsumed selection, and wakes the reader.
    pub fn notify(&self, cell: Cell) {
        let mut pending = self.lock();
        if let Some(previous) = pending.replace(cell) {
            trace!(%previous, %cell, "Unconsumed selection replaced");
        }
        self.ready.notify_one();
    }

    /// Consumes the pending selection, if any, without waiting.
    pub fn take(&self) -> Option<Cell> {
        self.lock().take()
    }

    /// Consumes the pending selection, waiting up to `timeout` for one.
    pub fn take_timeout(&self, timeout: Duration) -> Option<Cell> {
        let pending = self.lock();
        let (mut pending, _) = self
            .ready
            .wait_timeout_while(pending, timeout, |p| p.is_none())
            .unwrap_or_else(PoisonError::into_inner);
        pending.take()
    }

    /// Drops any unconsumed selection.
    pub fn clear(&self) {
        self.lock().take();
    }

    // Poisoning is ignored: the slot only ever holds a whole `Option<Cell>`.
    fn lock(&self) -> MutexGuard<'_, Option<Cell>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_selection_consumed_once() {
        let slot = SelectionSlot::new();
        slot.notify(Cell::new(1, 2));
        assert_eq!(slot.take(), Some(Cell::new(1, 2)));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_latest_selection_wins() {
        let slot = SelectionSlot::new();
        slot.notify(Cell::new(0, 0));
        slot.notify(Cell::new(2, 2));
        assert_eq!(slot.take(), Some(Cell::new(2, 2)));
    }

    #[test]
    fn test_take_timeout_expires_empty() {
        let slot = SelectionSlot::new();
        assert_eq!(slot.take_timeout(Duration::from_millis(5)), None);
    }

    #[test]
    fn test_take_timeout_sees_other_thread() {
        let slot = Arc::new(SelectionSlot::new());
        let writer = Arc::clone(&slot);
        let handle = thread::spawn(move || writer.notify(Cell::new(1, 1)));

        let mut seen = None;
        for _ in 0..100 {
            seen = slot.take_timeout(Duration::from_millis(20));
            if seen.is_some() {
                break;
            }
        }
        handle.join().unwrap();
        assert_eq!(seen, Some(Cell::new(1, 1)));
    }

    #[test]
    fn test_clear_discards_pending() {
        let slot = SelectionSlot::new();
        slot.notify(Cell::new(0, 1));
        slot.clear();
        assert_eq!(slot.take(), None);
    }
}
