//! Typed access to the query cache.

mod client;
mod error;

pub use client::{QueryClient, StaleTime};
pub use error::QueryError;
