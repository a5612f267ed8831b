use thiserror::Error;

use crate::cache::CacheError;
use crate::service::ApiError;

/// Errors returned by a store profile update.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileUpdateError {
    /// The service refused the write; the cache was rolled back.
    #[error("Profile update rejected: {0}")]
    Rejected(#[source] ApiError),
    /// The cache could not be read or written. A failed rollback ends up
    /// here, and the rejected value may still be cached.
    #[error(transparent)]
    Cache(#[from] CacheError),
}
