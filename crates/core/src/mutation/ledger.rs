//! Bookkeeping for overlapping optimistic writes to one cache key.
//!
//! Each in-flight attempt owns the snapshot taken just before its optimistic
//! write. The ledger tracks which attempt's value currently sits in the cache
//! (the head) so that a stale failure never overwrites a newer write:
//!
//! - head fails: its snapshot is restored and the newest older attempt
//!   becomes the head again;
//! - non-head fails: nothing is written, its snapshot replaces the snapshot of
//!   the next newer attempt (which had captured the failed value);
//! - any attempt succeeds: all older attempts lose their snapshots, so a late
//!   failure cannot roll back past a confirmed write.

use std::collections::BTreeMap;

/// What to do with the cache after an attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackAction {
    /// Write these bytes back to the key.
    Restore(Vec<u8>),
    /// A newer attempt owns the key; its snapshot was rewritten instead.
    HandedDown { to: u64 },
    /// Nothing to undo.
    Skip,
}

/// In-flight attempts against one key, ordered by sequence number.
#[derive(Debug, Clone, Default)]
pub struct KeyLedger {
    attempts: BTreeMap<u64, Vec<u8>>,
    head: Option<u64>,
}

impl KeyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an attempt that just wrote its optimistic value over `snapshot`.
    pub fn record(&mut self, seq: u64, snapshot: Vec<u8>) {
        debug_assert!(self.attempts.keys().all(|&s| s < seq));
        self.attempts.insert(seq, snapshot);
        self.head = Some(seq);
    }

    /// Settles a successful attempt.
    pub fn confirm(&mut self, seq: u64) {
        if self.attempts.remove(&seq).is_none() {
            return;
        }
        self.attempts = self.attempts.split_off(&seq);
        if self.head == Some(seq) {
            self.head = None;
        }
    }

    /// Settles a failed attempt and returns the cache action it requires.
    pub fn fail(&mut self, seq: u64) -> RollbackAction {
        let Some(snapshot) = self.attempts.remove(&seq) else {
            return RollbackAction::Skip;
        };

        if self.head == Some(seq) {
            self.head = self.attempts.range(..seq).next_back().map(|(&s, _)| s);
            return RollbackAction::Restore(snapshot);
        }

        match self.attempts.range_mut(seq..).next() {
            Some((&newer, newer_snapshot)) => {
                *newer_snapshot = snapshot;
                RollbackAction::HandedDown { to: newer }
            }
            None => RollbackAction::Skip,
        }
    }

    /// Returns the attempt whose value is currently cached, if any.
    pub fn head(&self) -> Option<u64> {
        self.head
    }

    /// Returns true once no attempt is in flight.
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    /// Returns the number of in-flight attempts.
    pub fn len(&self) -> usize {
        self.attempts.len()
    }
}
