use std::time::{Duration, Instant};

use tokio::sync::broadcast;

use super::Result;

/// A value held by the query cache together with the time it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedValue {
    pub data: Vec<u8>,
    pub updated_at: Instant,
}

impl CachedValue {
    /// Wraps freshly written bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            updated_at: Instant::now(),
        }
    }

    /// Returns how long ago the value was written.
    pub fn age(&self) -> Duration {
        self.updated_at.elapsed()
    }
}

/// Change notification delivered to subscribers of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    /// The key now holds a new value.
    Updated { key: String },
    /// The key was removed.
    Removed { key: String },
}

impl CacheEvent {
    /// Returns the key the event refers to.
    pub fn key(&self) -> &str {
        match self {
            CacheEvent::Updated { key } | CacheEvent::Removed { key } => key,
        }
    }
}

/// Process-wide keyed store of query results.
///
/// Operations are synchronous and last-write-wins. Implementations must be
/// shareable across tasks; callers hold them behind an `Arc`.
pub trait QueryCache: Send + Sync {
    /// Gets the current value for a key.
    fn get(&self, key: &str) -> Result<Option<CachedValue>>;

    /// Replaces the value for a key and notifies its subscribers.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Removes the value for a key and notifies its subscribers.
    fn remove(&self, key: &str) -> Result<()>;

    /// Subscribes to changes of a single key.
    fn subscribe(&self, key: &str) -> Result<broadcast::Receiver<CacheEvent>>;
}
