//! Partition file naming and discovery
//!
//! A partition is every file holding records for one calendar date:
//! `<date>.json` followed by rollover files `<date>_<n>.json`, n ≥ 1.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::record::DATE_FORMAT;

const EXTENSION: &str = ".json";

/// File name of a partition file; index 0 is the primary file
///
/// (2024-01-01, 0) → "2024-01-01.json"
/// (2024-01-01, 3) → "2024-01-01_3.json"
pub fn partition_file_name(date: NaiveDate, index: u32) -> String {
    let date = date.format(DATE_FORMAT);
    if index == 0 {
        format!("{date}{EXTENSION}")
    } else {
        format!("{date}_{index}{EXTENSION}")
    }
}

/// Full path of a partition file inside the storage directory
pub fn partition_path(dir: &Path, date: NaiveDate, index: u32) -> PathBuf {
    dir.join(partition_file_name(date, index))
}

/// Parse a partition file name back into its date and index
///
/// Only names produced by [`partition_file_name`] are accepted, so
/// "2024-01-01-notes.json" or "2024-01-01_01.json" yield `None`.
pub fn parse_partition_file_name(name: &str) -> Option<(NaiveDate, u32)> {
    let stem = name.strip_suffix(EXTENSION)?;
    let (date_str, index) = match stem.split_once('_') {
        Some((date_str, index_str)) => (date_str, index_str.parse::<u32>().ok()?),
        None => (stem, 0),
    };

    let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).ok()?;
    (partition_file_name(date, index) == name).then_some((date, index))
}

/// Pick the file the next record for `date` goes into
///
/// The primary file is used until it reaches `max_file_size`; after that
/// the first rollover file that is missing or below the threshold wins.
pub fn select_write_target(dir: &Path, date: NaiveDate, max_file_size: u64) -> io::Result<PathBuf> {
    let mut index = 0;
    loop {
        let path = partition_path(dir, date, index);
        if !is_full(&path, max_file_size)? {
            return Ok(path);
        }
        index += 1;
    }
}

/// List partition files for every date in `[start, end]`
///
/// Ordered by date, then primary file first, then rollovers by numeric
/// index (`_2` before `_10`).
pub fn list_partition_files(dir: &Path, start: NaiveDate, end: NaiveDate) -> io::Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut found: Vec<(NaiveDate, u32, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some((date, index)) = name.to_str().and_then(parse_partition_file_name) else {
            continue;
        };
        if date >= start && date <= end {
            found.push((date, index, entry.path()));
        }
    }

    found.sort_by_key(|(date, index, _)| (*date, *index));
    Ok(found.into_iter().map(|(_, _, path)| path).collect())
}

fn is_full(path: &Path, max_file_size: u64) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.len() >= max_file_size),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
