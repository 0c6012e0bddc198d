// SPDX-License-Identifier: MIT

//! Application error types.
//!
//! Every error here is non-fatal to a screen: failures surface as a
//! banner string and, for booking calls, a per-item status label.

/// Errors from talking to the shift service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The server rejected the call and supplied a `message` body.
    /// The message text feeds the status classification in
    /// [`crate::models::ShiftStatus::from_failure_message`].
    #[error("{0}")]
    Api(String),

    /// Transport-level failure (connection refused, DNS, etc).
    #[error("request failed: {0}")]
    Network(String),

    /// A 2xx response whose body could not be parsed.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl AppError {
    /// The server-provided message, if this error carries one.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            AppError::Api(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Result type alias for client calls.
pub type Result<T> = std::result::Result<T, AppError>;
