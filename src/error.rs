//! Error types for chatlog
//!
//! Provides a unified error type for store and transport operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ChatLogError
pub type Result<T> = std::result::Result<T, ChatLogError>;

/// Unified error type for chatlog operations
#[derive(Debug, Error)]
pub enum ChatLogError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    /// An existing partition file could not be parsed as a record array
    #[error("Corrupt partition file {}: {source}", .path.display())]
    CorruptPartition {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChatLogError {
    /// Whether the caller is at fault (bad input) rather than the store
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InvalidDate(_))
    }
}
