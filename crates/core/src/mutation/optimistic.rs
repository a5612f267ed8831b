use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::{decode, encode, CacheError, QueryCache, Result};

use super::ledger::{KeyLedger, RollbackAction};

/// State of one optimistic attempt, created by [`OptimisticCache::begin`].
///
/// Holds the attempt's sequence number and the value that was cached before
/// it (`None` when the key was empty and nothing was written).
#[derive(Debug)]
#[must_use = "an attempt must be confirmed or rolled back"]
pub struct MutationContext<T> {
    key: String,
    seq: u64,
    previous: Option<T>,
}

impl<T> MutationContext<T> {
    /// Returns the cache key this attempt wrote to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the attempt's sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Returns the value cached before this attempt, if there was one.
    pub fn previous(&self) -> Option<&T> {
        self.previous.as_ref()
    }
}

/// Result of rolling back one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rollback {
    /// The snapshot was written back to the cache.
    Restored,
    /// A newer attempt owns the key; the snapshot moved to it.
    Deferred,
    /// Nothing to undo: no snapshot, or superseded by a confirmed write.
    Skipped,
}

#[derive(Debug, Default)]
struct State {
    next_seq: u64,
    ledgers: HashMap<String, KeyLedger>,
}

/// Snapshot/write/rollback over a shared [`QueryCache`].
///
/// Attempts get increasing sequence numbers at `begin`. Reading the snapshot,
/// writing the optimistic value and recording the attempt happen under one
/// lock, so the pair is never interleaved with another attempt's.
pub struct OptimisticCache<C: QueryCache> {
    cache: Arc<C>,
    state: Mutex<State>,
}

impl<C: QueryCache> OptimisticCache<C> {
    pub fn new(cache: Arc<C>) -> Self {
        Self {
            cache,
            state: Mutex::new(State::default()),
        }
    }

    /// Returns the underlying cache.
    pub fn cache(&self) -> &Arc<C> {
        &self.cache
    }

    /// Snapshots `key` and writes `apply(current)` over it.
    ///
    /// When the key is empty nothing is written and the returned context has
    /// no previous value; rolling it back is a no-op.
    pub fn begin<T, F>(&self, key: &str, apply: F) -> Result<MutationContext<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(T) -> T,
    {
        let mut state = self.lock()?;
        state.next_seq += 1;
        let seq = state.next_seq;

        let Some(current) = self.cache.get(key)? else {
            tracing::debug!(%key, seq, "No cached value, skipping optimistic write");
            return Ok(MutationContext {
                key: key.to_string(),
                seq,
                previous: None,
            });
        };

        let previous: T = decode(&current.data)?;
        let optimistic = encode(&apply(decode(&current.data)?))?;
        self.cache.set(key, &optimistic)?;
        state
            .ledgers
            .entry(key.to_string())
            .or_default()
            .record(seq, current.data);

        tracing::debug!(%key, seq, "Optimistic value written");
        Ok(MutationContext {
            key: key.to_string(),
            seq,
            previous: Some(previous),
        })
    }

    /// Settles a successful attempt. The optimistic value stays in the cache.
    pub fn confirm<T>(&self, context: MutationContext<T>) -> Result<()> {
        let mut state = self.lock()?;
        if let Some(ledger) = state.ledgers.get_mut(&context.key) {
            ledger.confirm(context.seq);
            if ledger.is_empty() {
                state.ledgers.remove(&context.key);
            }
        }
        tracing::debug!(key = %context.key, seq = context.seq, "Optimistic value confirmed");
        Ok(())
    }

    /// Settles a failed attempt, restoring its snapshot if it still owns the key.
    ///
    /// If writing the snapshot back fails the error is returned and the
    /// attempt stays in flight with its snapshot.
    pub fn rollback<T>(&self, context: MutationContext<T>) -> Result<Rollback> {
        let mut state = self.lock()?;
        let Some(ledger) = state.ledgers.get_mut(&context.key) else {
            return Ok(Rollback::Skipped);
        };

        // Settle on a copy: a failed restore must leave the attempt recorded
        let mut settled = ledger.clone();
        let action = settled.fail(context.seq);
        if let RollbackAction::Restore(snapshot) = &action {
            self.cache.set(&context.key, snapshot)?;
        }
        *ledger = settled;
        if ledger.is_empty() {
            state.ledgers.remove(&context.key);
        }

        match action {
            RollbackAction::Restore(_) => {
                tracing::warn!(key = %context.key, seq = context.seq, "Optimistic value rolled back");
                Ok(Rollback::Restored)
            }
            RollbackAction::HandedDown { to } => {
                tracing::debug!(
                    key = %context.key,
                    seq = context.seq,
                    newer = to,
                    "Newer attempt owns the key, rollback deferred"
                );
                Ok(Rollback::Deferred)
            }
            RollbackAction::Skip => Ok(Rollback::Skipped),
        }
    }

    /// Returns the number of unsettled attempts against `key`.
    pub fn in_flight(&self, key: &str) -> Result<usize> {
        let state = self.lock()?;
        Ok(state.ledgers.get(key).map_or(0, KeyLedger::len))
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|e| CacheError::Poisoned(e.to_string()))
    }
}
