//! Client error types.

use manageshop_core::restaurant::FormError;
use manageshop_core::service::ApiError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] FormError),
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) if e.is_decode() => ApiError::InvalidResponse(e.to_string()),
            ClientError::Request(e) => ApiError::Transport(e.to_string()),
            ClientError::ServerError { status, message } => ApiError::Rejected { status, message },
            ClientError::NotFound { resource } => ApiError::NotFound(resource),
            ClientError::InvalidInput(e) => ApiError::Rejected {
                status: 400,
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_maps_to_rejected() {
        let err = ClientError::ServerError {
            status: 422,
            message: "name too long".to_string(),
        };
        assert_eq!(
            ApiError::from(err),
            ApiError::Rejected {
                status: 422,
                message: "name too long".to_string()
            }
        );
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err = ClientError::NotFound {
            resource: "/profile".to_string(),
        };
        assert_eq!(
            ApiError::from(err),
            ApiError::NotFound("/profile".to_string())
        );
    }

    #[test]
    fn test_invalid_input_display() {
        let err = ClientError::from(FormError::EmptyManagerName);
        assert_eq!(err.to_string(), "Invalid input: Manager name cannot be empty");
    }
}
