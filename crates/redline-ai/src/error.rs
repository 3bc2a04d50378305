//! Error types for the model gateway

use thiserror::Error;

/// Gateway error types
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The credential required to reach the model API is not configured.
    #[error("{0} not configured")]
    MissingCredential(&'static str),

    /// The model API rejected the call or failed before producing output.
    #[error("Model error: {0}")]
    Model(String),

    /// The fragment stream failed after emission had begun.
    #[error("Stream error: {0}")]
    Stream(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
