//! # chatlog
//!
//! A small chat-log service with:
//! - Date-partitioned JSON files, one directory per deployment
//! - Size-based rollover within a day's partition
//! - Single-writer/multi-reader locking around the partition files
//! - HTTP API for appending and querying by date range
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │             POST /api/v1/logs   GET /api/v1/logs             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      LogStore                                │
//! │        (exclusive lock on write / shared on query)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!   ┌───────────────────────────────────────────────────────┐
//!   │ storage/2024-01-01.json  2024-01-01_1.json  ...       │
//!   └───────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod network;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ChatLogError, Result};
pub use config::Config;
pub use record::{ChatLog, NewChatLog};
pub use store::LogStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of chatlog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
