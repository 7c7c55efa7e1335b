//! Configuration for chatlog
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{ChatLogError, Result};

/// Default rollover threshold for a single partition file (100 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Main configuration for a chatlog instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding all partition files
    /// Internal structure:
    ///   {storage_dir}/
    ///     ├── 2024-01-01.json      (primary file)
    ///     ├── 2024-01-01_1.json    (rollover files)
    ///     └── 2024-01-02.json
    pub storage_dir: PathBuf,

    /// Size (in bytes) at which a partition file stops receiving writes
    pub max_file_size: u64,

    // -------------------------------------------------------------------------
    // Query Configuration
    // -------------------------------------------------------------------------
    /// Days before the end date covered when a query omits its start date
    pub lookback_days: u32,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./storage"),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            lookback_days: 7,
            listen_addr: "0.0.0.0:8090".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings the store cannot operate with
    pub fn validate(&self) -> Result<()> {
        if self.max_file_size == 0 {
            return Err(ChatLogError::Config(
                "max_file_size must be greater than zero".to_string(),
            ));
        }
        if self.storage_dir.as_os_str().is_empty() {
            return Err(ChatLogError::Config(
                "storage_dir must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the storage directory
    pub fn storage_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.storage_dir = path.into();
        self
    }

    /// Set the rollover threshold (in bytes)
    pub fn max_file_size(mut self, size: u64) -> Self {
        self.config.max_file_size = size;
        self
    }

    /// Set the default query lookback (in days)
    pub fn lookback_days(mut self, days: u32) -> Self {
        self.config.lookback_days = days;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
