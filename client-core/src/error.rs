//! Unified error types for the Ripple client core
//!
//! This module defines error types for each layer:
//! - `DomainError`: use-case and repository-port errors
//! - `RestError`: REST data-source adapter errors

use thiserror::Error;

/// Domain layer errors - surfaced by use cases and repository ports
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Ripple REST API adapter errors
#[derive(Debug, Error)]
pub enum RestError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} {code} - {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Unauthorized - invalid or expired token")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    /// The server answered 2xx but flagged the envelope as failed
    #[error("API reported failure: {0}")]
    Envelope(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<RestError> for DomainError {
    fn from(e: RestError) -> Self {
        match &e {
            RestError::Api { status: 404, .. } => DomainError::NotFound(e.to_string()),
            _ => DomainError::DataSource(e.to_string()),
        }
    }
}
