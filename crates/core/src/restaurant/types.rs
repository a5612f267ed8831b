use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The editable part of a restaurant: what the store profile dialog submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreProfile {
    pub name: String,
    pub description: Option<String>,
}

impl StoreProfile {
    /// Creates a profile with a name and an optional description.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }

    /// Writes name and description into a raw restaurant record.
    ///
    /// Every other field is left exactly as the server sent it, including
    /// fields `ManagedRestaurant` does not model. Records that are not JSON
    /// objects are left alone.
    pub fn apply_to(&self, record: &mut Value) {
        let Some(fields) = record.as_object_mut() else {
            return;
        };
        fields.insert("name".to_string(), Value::String(self.name.clone()));
        fields.insert(
            "description".to_string(),
            self.description.clone().map_or(Value::Null, Value::String),
        );
    }
}

/// The restaurant managed by the signed-in user, as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedRestaurant {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub manager_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ManagedRestaurant {
    /// Creates a restaurant with only an ID and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            manager_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the manager ID.
    pub fn with_manager(mut self, manager_id: impl Into<String>) -> Self {
        self.manager_id = Some(manager_id.into());
        self
    }

    /// Returns the editable profile of this restaurant.
    pub fn profile(&self) -> StoreProfile {
        StoreProfile::new(self.name.clone(), self.description.clone())
    }

    /// Replaces name and description, keeping every other field.
    pub fn with_profile(mut self, profile: StoreProfile) -> Self {
        self.name = profile.name;
        self.description = profile.description;
        self
    }
}

/// Orders placed in the current month, compared with the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthOrdersAmount {
    pub amount: u64,
    /// Percentage difference from last month (may be negative).
    pub diff_from_last_month: f64,
}

impl MonthOrdersAmount {
    /// Formats the month-over-month difference with an explicit sign.
    pub fn diff_label(&self) -> String {
        if self.diff_from_last_month >= 0.0 {
            format!("+{}%", self.diff_from_last_month)
        } else {
            format!("{}%", self.diff_from_last_month)
        }
    }
}
