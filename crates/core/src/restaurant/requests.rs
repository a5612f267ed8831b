//! API request payloads for restaurant operations.
//!
//! Pure data types shared by the client and its test fakes.

use serde::{Deserialize, Serialize};

use super::types::StoreProfile;

/// Request payload for `PUT /profile`.
///
/// Both fields are always sent: the server replaces the whole editable part
/// of the record, so a `null` description clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub description: Option<String>,
}

impl From<StoreProfile> for UpdateProfileRequest {
    fn from(profile: StoreProfile) -> Self {
        Self {
            name: profile.name,
            description: profile.description,
        }
    }
}

/// Request payload for `POST /restaurants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRestaurantRequest {
    pub restaurant_name: String,
    pub manager_name: String,
    pub email: String,
    pub phone: String,
}
