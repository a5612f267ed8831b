//! Optimistic writes to the query cache.

mod error;
mod ledger;
mod optimistic;
mod profile;

pub use error::ProfileUpdateError;
pub use ledger::{KeyLedger, RollbackAction};
pub use optimistic::{MutationContext, OptimisticCache, Rollback};
pub use profile::{
    PendingProfileUpdate, StoreProfileController, PROFILE_UPDATED, PROFILE_UPDATE_FAILED,
};
