use async_trait::async_trait;

use crate::restaurant::{ManagedRestaurant, UpdateProfileRequest};

use super::Result;

/// Remote service owning the managed restaurant record.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Fetches the restaurant managed by the signed-in user.
    async fn get_managed_restaurant(&self) -> Result<ManagedRestaurant>;

    /// Replaces the restaurant's name and description.
    ///
    /// The response body is ignored by callers; success means the write was
    /// accepted.
    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<()>;
}
