//! Restaurant API operations.

use async_trait::async_trait;
use manageshop_core::restaurant::{
    ManagedRestaurant, RegisterRestaurantRequest, UpdateProfileRequest,
};
use manageshop_core::service::{ApiError, ProfileService};

use super::ManageShopClient;
use crate::error::Result;

impl ManageShopClient {
    /// Get the restaurant managed by the signed-in user.
    pub async fn get_managed_restaurant(&self) -> Result<ManagedRestaurant> {
        let response = self
            .client
            .get(self.url("/managed-restaurant"))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Replace the store's name and description.
    pub async fn update_profile(&self, req: &UpdateProfileRequest) -> Result<()> {
        let response = self
            .client
            .put(self.url("/profile"))
            .json(req)
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    /// Register a new restaurant and its manager.
    pub async fn register_restaurant(&self, req: &RegisterRestaurantRequest) -> Result<()> {
        let response = self
            .client
            .post(self.url("/restaurants"))
            .json(req)
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}

#[async_trait]
impl ProfileService for ManageShopClient {
    async fn get_managed_restaurant(&self) -> std::result::Result<ManagedRestaurant, ApiError> {
        ManageShopClient::get_managed_restaurant(self)
            .await
            .map_err(ApiError::from)
    }

    async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> std::result::Result<(), ApiError> {
        ManageShopClient::update_profile(self, request)
            .await
            .map_err(ApiError::from)
    }
}
