//! Error types for recipe-finder-core.
//!
//! Nothing in this crate propagates these to the page: the view controller
//! logs them and turns each one into a renderable state.

use thiserror::Error;

/// Errors that can occur while talking to the recipe backend.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The configured base URL or an endpoint path could not be parsed
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
    /// The request never produced a response (network down, CORS, DNS...)
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The response body was not the JSON shape we expected
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
