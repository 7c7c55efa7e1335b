//! Response definitions
//!
//! Represents the JSON envelope returned to clients.

use serde::Serialize;

/// Envelope for every API response
#[derive(Debug, Clone, Serialize)]
pub struct LogResponse<T: Serialize> {
    /// Mirrors the HTTP status code
    pub code: u16,

    /// Human-readable outcome
    pub message: String,

    /// Payload (stored record, or list of records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> LogResponse<T> {
    /// Create a 200 response carrying data
    pub fn ok(message: &str, data: T) -> Self {
        Self {
            code: 200,
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl LogResponse<()> {
    /// Create a failure response without data
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}
