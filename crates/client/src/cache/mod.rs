//! In-memory query cache backend.
//!
//! Provides the process-wide query cache shared by the profile editor and
//! the dashboard queries.

mod memory;

pub use memory::MemoryQueryCache;
