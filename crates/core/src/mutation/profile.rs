//! Store profile editing with optimistic cache updates.
//!
//! Submitting a profile writes the new name and description into the cached
//! managed restaurant before the request leaves, so every reader of the cache
//! sees the edit immediately. A rejected request restores the previous value;
//! an accepted one leaves the optimistic value in place without refetching.

use std::sync::Arc;

use serde_json::Value;

use crate::cache::{managed_restaurant_key, QueryCache, Result as CacheResult};
use crate::notify::{Notice, Notifier};
use crate::query::{QueryClient, QueryError, StaleTime};
use crate::restaurant::{ManagedRestaurant, StoreProfile, UpdateProfileRequest};
use crate::service::{ApiError, ProfileService};

use super::{MutationContext, OptimisticCache, ProfileUpdateError, Rollback};

pub const PROFILE_UPDATED: &str = "Your store's profile was updated successfully";
pub const PROFILE_UPDATE_FAILED: &str = "Something went wrong while updating";

/// Drives profile edits against the cached managed restaurant.
pub struct StoreProfileController<C, S, N>
where
    C: QueryCache,
    S: ProfileService,
    N: Notifier,
{
    optimistic: Arc<OptimisticCache<C>>,
    query: QueryClient<C>,
    service: Arc<S>,
    notifier: Arc<N>,
}

impl<C, S, N> StoreProfileController<C, S, N>
where
    C: QueryCache,
    S: ProfileService,
    N: Notifier,
{
    /// Creates a controller.
    ///
    /// The `OptimisticCache` is shared so that every writer of the managed
    /// restaurant key goes through the same attempt ledger.
    pub fn new(optimistic: Arc<OptimisticCache<C>>, service: Arc<S>, notifier: Arc<N>) -> Self {
        let query = QueryClient::new(Arc::clone(optimistic.cache()));
        Self {
            optimistic,
            query,
            service,
            notifier,
        }
    }

    /// Loads the managed restaurant, from the cache when present.
    ///
    /// The cached record never goes stale on its own; only profile edits
    /// replace it.
    pub async fn load(&self) -> Result<ManagedRestaurant, QueryError<ApiError>> {
        self.query
            .fetch_query(&managed_restaurant_key(), StaleTime::Never, || {
                self.service.get_managed_restaurant()
            })
            .await
    }

    /// Returns the cached managed restaurant, if loaded.
    pub fn current(&self) -> CacheResult<Option<ManagedRestaurant>> {
        self.query.get_query_data(&managed_restaurant_key())
    }

    /// Writes the optimistic value and returns the request still to be sent.
    ///
    /// The cache already holds `profile` when this returns. Dropping the
    /// returned handle without sending it rolls the write back.
    pub fn prepare(
        &self,
        profile: StoreProfile,
    ) -> CacheResult<PendingProfileUpdate<'_, C, S, N>> {
        // Patch the raw record so fields the client does not model survive
        let context = self
            .optimistic
            .begin(&managed_restaurant_key(), |mut record: Value| {
                profile.apply_to(&mut record);
                record
            })?;
        let previous = context
            .previous()
            .and_then(|record| serde_json::from_value(record.clone()).ok());
        Ok(PendingProfileUpdate {
            controller: self,
            request: UpdateProfileRequest::from(profile),
            previous,
            context: Some(context),
        })
    }

    /// Updates the store profile: optimistic write, request, then confirm or
    /// roll back. Never retries.
    pub async fn submit(
        &self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), ProfileUpdateError> {
        self.prepare(StoreProfile::new(name, description))?
            .send()
            .await
    }
}

/// A profile update whose optimistic write is in the cache but whose request
/// has not resolved yet.
pub struct PendingProfileUpdate<'a, C, S, N>
where
    C: QueryCache,
    S: ProfileService,
    N: Notifier,
{
    controller: &'a StoreProfileController<C, S, N>,
    request: UpdateProfileRequest,
    previous: Option<ManagedRestaurant>,
    context: Option<MutationContext<Value>>,
}

impl<C, S, N> PendingProfileUpdate<'_, C, S, N>
where
    C: QueryCache,
    S: ProfileService,
    N: Notifier,
{
    /// Returns the restaurant as it was cached before this update.
    pub fn previous(&self) -> Option<&ManagedRestaurant> {
        self.previous.as_ref()
    }

    /// Sends the update and settles the optimistic write.
    pub async fn send(mut self) -> Result<(), ProfileUpdateError> {
        let controller = self.controller;
        let result = controller.service.update_profile(&self.request).await;
        let context = self.context.take();

        match result {
            Ok(()) => {
                if let Some(context) = context {
                    // The cache already holds the submitted value
                    if let Err(err) = controller.optimistic.confirm(context) {
                        tracing::warn!(error = %err, "Failed to settle confirmed profile update");
                    }
                }
                tracing::info!(name = %self.request.name, "Store profile updated");
                controller.notifier.notify(Notice::success(PROFILE_UPDATED));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Store profile update rejected");
                controller
                    .notifier
                    .notify(Notice::error(PROFILE_UPDATE_FAILED));
                if let Some(context) = context {
                    // The rejected value is still cached; the caller must know
                    if let Err(cache_err) = controller.optimistic.rollback(context) {
                        tracing::error!(error = %cache_err, "Failed to roll back profile update");
                        return Err(ProfileUpdateError::Cache(cache_err));
                    }
                }
                Err(ProfileUpdateError::Rejected(err))
            }
        }
    }
}

impl<C, S, N> Drop for PendingProfileUpdate<'_, C, S, N>
where
    C: QueryCache,
    S: ProfileService,
    N: Notifier,
{
    fn drop(&mut self) {
        let Some(context) = self.context.take() else {
            return;
        };
        match self.controller.optimistic.rollback(context) {
            Ok(Rollback::Skipped) => {}
            Ok(outcome) => {
                tracing::warn!(?outcome, "Profile update abandoned before it resolved")
            }
            Err(err) => tracing::warn!(error = %err, "Failed to roll back abandoned profile update"),
        }
    }
}
