//! Store Module
//!
//! Flat-file record storage partitioned by calendar date.
//!
//! ## Responsibilities
//! - Assign ids and input times at write time
//! - Route each write to today's partition, rolling over when full
//! - Serialize all writes behind one process-wide lock
//! - Scan partitions across a date range for reads
//!
//! ## On-Disk Layout
//! ```text
//! {storage_dir}/
//! ├── 2024-01-01.json      primary file (JSON array of records)
//! ├── 2024-01-01_1.json    rollover once the primary reaches max_file_size
//! ├── 2024-01-01_2.json
//! └── 2024-01-02.json
//! ```
//!
//! No indexing, no compaction, no retention.

mod log_store;
pub mod partition;

pub use log_store::LogStore;
