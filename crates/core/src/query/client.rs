use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::cache::{decode, encode, CacheEvent, CachedValue, QueryCache, Result as CacheResult};

use super::QueryError;

/// How long a cached query result counts as fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleTime {
    /// Every read refetches.
    #[default]
    Immediately,
    /// Fresh until the given age.
    After(Duration),
    /// Fresh forever; only explicit writes replace it.
    Never,
}

impl StaleTime {
    /// Returns true if a value of this age must be refetched.
    pub fn is_stale(&self, age: Duration) -> bool {
        match self {
            StaleTime::Immediately => true,
            StaleTime::After(limit) => age >= *limit,
            StaleTime::Never => false,
        }
    }
}

/// Typed client over a shared [`QueryCache`].
///
/// Values are stored as JSON, so any component holding the same cache sees
/// the same data regardless of which client wrote it.
pub struct QueryClient<C: QueryCache> {
    cache: Arc<C>,
}

impl<C: QueryCache> Clone for QueryClient<C> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<C: QueryCache> QueryClient<C> {
    pub fn new(cache: Arc<C>) -> Self {
        Self { cache }
    }

    /// Returns the underlying cache.
    pub fn cache(&self) -> &Arc<C> {
        &self.cache
    }

    /// Reads and decodes the cached value for a key.
    pub fn get_query_data<T: DeserializeOwned>(&self, key: &str) -> CacheResult<Option<T>> {
        match self.cache.get(key)? {
            Some(value) => decode(&value.data).map(Some),
            None => Ok(None),
        }
    }

    /// Encodes and stores a value for a key.
    pub fn set_query_data<T: Serialize>(&self, key: &str, value: &T) -> CacheResult<()> {
        let bytes = encode(value)?;
        self.cache.set(key, &bytes)
    }

    /// Subscribes to changes of a key.
    pub fn subscribe(&self, key: &str) -> CacheResult<broadcast::Receiver<CacheEvent>> {
        self.cache.subscribe(key)
    }

    /// Returns the cached value if it is fresh, otherwise fetches and caches it.
    ///
    /// A cached value that no longer decodes is treated as a miss.
    pub async fn fetch_query<T, E, F, Fut>(
        &self,
        key: &str,
        stale_time: StaleTime,
        fetch: F,
    ) -> Result<T, QueryError<E>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(cached) = self.cache.get(key)? {
            if let Some(value) = fresh_value::<T>(key, &cached, stale_time) {
                return Ok(value);
            }
        }

        tracing::debug!(%key, "Query cache miss, fetching");
        let value = fetch().await.map_err(QueryError::Fetch)?;
        self.set_query_data(key, &value)?;
        Ok(value)
    }
}

fn fresh_value<T: DeserializeOwned>(
    key: &str,
    cached: &CachedValue,
    stale_time: StaleTime,
) -> Option<T> {
    if stale_time.is_stale(cached.age()) {
        tracing::debug!(%key, age_ms = cached.age().as_millis() as u64, "Cached query is stale");
        return None;
    }
    match decode(&cached.data) {
        Ok(value) => {
            tracing::trace!(%key, "Query cache hit");
            Some(value)
        }
        Err(err) => {
            tracing::warn!(%key, error = %err, "Cached query failed to decode");
            None
        }
    }
}
