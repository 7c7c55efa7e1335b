//! Log Store
//!
//! Owns the storage directory and all reads/writes of partition files.
//!
//! ## Responsibilities
//! - Stamp ids and input times on incoming records
//! - Select the partition file (with rollover) for each write
//! - Read-modify-write partition files under the store lock
//! - Scan partitions across a date range for queries

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Days, Local, NaiveDate, NaiveDateTime};
use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{ChatLogError, Result};
use crate::record::{ChatLog, NewChatLog};

use super::partition;

/// Date-partitioned JSON record store
///
/// ## Concurrency:
/// - Writes hold `lock` exclusively for the whole read-modify-write cycle,
///   so concurrent appends are fully serialized
/// - Queries hold `lock` shared, so they never see a file mid-rewrite
/// - One process per storage directory; nothing guards against other
///   processes writing the same files
pub struct LogStore {
    /// Store configuration
    config: Config,

    /// Guards the set of partition files
    lock: RwLock<()>,
}

impl LogStore {
    /// Open a store on the configured directory, creating it if needed
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        fs::create_dir_all(&config.storage_dir)?;

        tracing::info!(
            storage_dir = %config.storage_dir.display(),
            max_file_size = config.max_file_size,
            "Log store opened"
        );

        Ok(Self {
            config,
            lock: RwLock::new(()),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified storage directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().storage_dir(path).build())
    }

    /// Append a record, stamped with the current local time
    pub fn append(&self, entry: NewChatLog) -> Result<ChatLog> {
        self.append_at(entry, Local::now().naive_local())
    }

    /// Append a record as if written at `now`
    ///
    /// Steps:
    /// 1. Stamp id and input time
    /// 2. Acquire write lock
    /// 3. Select target file for `now`'s date (rolling over when full)
    /// 4. Read existing records, append, rewrite via temp file + rename
    pub fn append_at(&self, entry: NewChatLog, now: NaiveDateTime) -> Result<ChatLog> {
        if entry.text.is_empty() {
            return Err(ChatLogError::InvalidInput("text must not be empty".to_string()));
        }

        let record = entry.stamp(now);
        let date = now.date();

        let _write_guard = self.lock.write();

        let path = partition::select_write_target(self.storage_dir(), date, self.config.max_file_size)?;
        if path != partition::partition_path(self.storage_dir(), date, 0) && !path.exists() {
            tracing::info!("Partition {} rolled over to {}", date, path.display());
        }

        let mut records = if path.exists() {
            read_partition(&path)?
        } else {
            Vec::new()
        };
        records.push(record.clone());
        write_partition(&path, &records)?;

        tracing::debug!(
            id = %record.id,
            file = %path.display(),
            count = records.len(),
            "Appended record"
        );

        Ok(record)
    }

    /// Query records between two dates (inclusive), relative to today
    pub fn query(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Vec<ChatLog>> {
        self.query_at(start, end, Local::now().date_naive())
    }

    /// Query records between two dates (inclusive)
    ///
    /// - `end` defaults to `today`
    /// - `start` defaults to `end` minus the configured lookback
    /// - `start > end` yields an empty result
    ///
    /// Any unreadable partition file fails the whole query.
    pub fn query_at(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Vec<ChatLog>> {
        let end = end.unwrap_or(today);
        let start = start.unwrap_or_else(|| {
            end.checked_sub_days(Days::new(u64::from(self.config.lookback_days)))
                .unwrap_or(NaiveDate::MIN)
        });

        if start > end {
            return Ok(Vec::new());
        }

        let _read_guard = self.lock.read();

        let mut records = Vec::new();
        for path in partition::list_partition_files(self.storage_dir(), start, end)? {
            records.extend(read_partition(&path)?);
        }

        tracing::debug!(%start, %end, count = records.len(), "Query complete");

        Ok(records)
    }

    /// Files currently making up the partition for `date`, in write order
    pub fn partition_files(&self, date: NaiveDate) -> Result<Vec<PathBuf>> {
        let _read_guard = self.lock.read();
        Ok(partition::list_partition_files(self.storage_dir(), date, date)?)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the storage directory path
    pub fn storage_dir(&self) -> &Path {
        &self.config.storage_dir
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// =============================================================================
// Private Helpers
// =============================================================================

/// Read a partition file as a record array; an empty file holds no records
fn read_partition(path: &Path) -> Result<Vec<ChatLog>> {
    let data = fs::read(path)?;
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(&data).map_err(|source| {
        tracing::error!("Partition file {} is corrupt: {}", path.display(), source);
        ChatLogError::CorruptPartition {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Replace a partition file with the pretty-printed records
///
/// Writes a hidden sibling temp file, syncs it, then renames it over the
/// target so the target is never observed half-written.
fn write_partition(path: &Path, records: &[ChatLog]) -> Result<()> {
    let data = serde_json::to_vec_pretty(records)?;
    let tmp_path = temp_path(path);

    let written = File::create(&tmp_path).and_then(|mut file| {
        file.write_all(&data)?;
        file.sync_all()
    });
    if let Err(e) = written.and_then(|()| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    Ok(())
}

/// "dir/2024-01-01.json" → "dir/.2024-01-01.json.tmp"
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}
