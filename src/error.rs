//! Blindbox error types

/// Blindbox error types
#[derive(Debug, thiserror::Error)]
pub enum BlindboxError {
    // Transport errors
    #[error("network error: {0}")]
    Network(String),

    /// Remote service returned a non-success status (or reported an error
    /// inside a 2xx body).
    #[error("remote service error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Image service refused the request with HTTP 429.
    #[error("rate limited by remote service: {message}")]
    RateLimited { message: String },

    /// Image service rejected the prompt or output as sensitive content.
    #[error("content rejected: {reason}")]
    ContentRejected { reason: String },

    // Data errors
    /// Remote returned success but the payload was missing the expected
    /// fields (no choices, no data array).
    #[error("malformed response from remote service: {0}")]
    MalformedResponse(String),

    /// The model's text reply could not be interpreted as the expected
    /// structured result. Never retried.
    #[error("failed to parse model reply: {0}")]
    ResponseParse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for blindbox operations
pub type Result<T> = std::result::Result<T, BlindboxError>;
