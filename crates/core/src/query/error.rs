use thiserror::Error;

use crate::cache::CacheError;

/// Errors returned by [`QueryClient::fetch_query`](super::QueryClient::fetch_query).
#[derive(Debug, Error)]
pub enum QueryError<E> {
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error("Query fetch failed: {0}")]
    Fetch(#[source] E),
}
