use thiserror::Error;

/// Errors reported by the remote restaurant service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server rejected the request with {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ApiError>;
