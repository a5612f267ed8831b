use thiserror::Error;

/// Errors raised while validating dashboard forms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Store name cannot be empty")]
    EmptyStoreName,
    #[error("Restaurant name cannot be empty")]
    EmptyRestaurantName,
    #[error("Manager name cannot be empty")]
    EmptyManagerName,
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}
