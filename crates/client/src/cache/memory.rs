//! In-memory query cache with LRU eviction and per-key change notifications.
//!
//! Each key gets its own broadcast channel, created on first subscription and
//! dropped once its last receiver is gone. Evicted keys notify their
//! subscribers the same way as removed ones.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use lru::LruCache;
use tokio::sync::broadcast;

use manageshop_core::cache::{CacheError, CacheEvent, CachedValue, QueryCache, Result};

/// Channel capacity for change notifications.
const CHANNEL_CAPACITY: usize = 16;

/// In-memory query cache.
///
/// Thread-safe through `Mutex`; every operation holds a lock only for the
/// duration of the call, so it is safe to use from async code.
#[derive(Debug)]
pub struct MemoryQueryCache {
    store: Mutex<LruCache<String, CachedValue>>,
    channels: Mutex<HashMap<String, broadcast::Sender<CacheEvent>>>,
}

impl MemoryQueryCache {
    /// Creates a cache holding at most `max_entries` queries.
    pub fn new(max_entries: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(max_entries).ok_or_else(|| {
            CacheError::OperationFailed("max_entries must be greater than zero".to_string())
        })?;
        Ok(Self {
            store: Mutex::new(LruCache::new(capacity)),
            channels: Mutex::new(HashMap::new()),
        })
    }

    /// Returns the number of cached queries.
    pub fn len(&self) -> Result<usize> {
        Ok(self.store()?.len())
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.store()?.is_empty())
    }

    fn store(&self) -> Result<MutexGuard<'_, LruCache<String, CachedValue>>> {
        self.store
            .lock()
            .map_err(|e| CacheError::Poisoned(e.to_string()))
    }

    fn channels(&self) -> Result<MutexGuard<'_, HashMap<String, broadcast::Sender<CacheEvent>>>> {
        self.channels
            .lock()
            .map_err(|e| CacheError::Poisoned(e.to_string()))
    }

    fn publish(&self, event: CacheEvent) -> Result<()> {
        let mut channels = self.channels()?;
        let key = event.key().to_string();
        if let Some(sender) = channels.get(&key) {
            if sender.send(event).is_err() {
                // Nobody is listening any more
                channels.remove(&key);
            }
        }
        Ok(())
    }
}

impl QueryCache for MemoryQueryCache {
    fn get(&self, key: &str) -> Result<Option<CachedValue>> {
        Ok(self.store()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let evicted = {
            let mut store = self.store()?;
            store
                .push(key.to_string(), CachedValue::new(value.to_vec()))
                .filter(|(evicted_key, _)| evicted_key != key)
                .map(|(evicted_key, _)| evicted_key)
        };

        if let Some(evicted_key) = evicted {
            tracing::debug!(key = %evicted_key, "Query evicted from cache");
            self.publish(CacheEvent::Removed { key: evicted_key })?;
        }
        self.publish(CacheEvent::Updated {
            key: key.to_string(),
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        let removed = self.store()?.pop(key).is_some();
        if removed {
            self.publish(CacheEvent::Removed {
                key: key.to_string(),
            })?;
        }
        Ok(())
    }

    fn subscribe(&self, key: &str) -> Result<broadcast::Receiver<CacheEvent>> {
        let mut channels = self.channels()?;
        let sender = channels
            .entry(key.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);
        Ok(sender.subscribe())
    }
}
