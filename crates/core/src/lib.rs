//! manageshop_core - functional core of the manageshop dashboard client.
//!
//! Holds the restaurant domain types, form validation, the query cache
//! contract with its typed client, and the optimistic mutation machinery used
//! by the store profile editor. No HTTP lives here; the remote service and the
//! notification sink are traits implemented by the client crate.

pub mod cache;
pub mod mutation;
pub mod notify;
pub mod query;
pub mod restaurant;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;
