//! Record definitions
//!
//! Defines the chat-log record as persisted in partition files, plus the
//! server-side id and timestamp formats.

use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ChatLogError, Result};

/// Timestamp prefix of a record id (14 digits)
pub const ID_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Format of `input_time` (millisecond precision)
pub const INPUT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Format of partition dates and query bounds
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Alphabet for the random id suffix (62 symbols)
pub const ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of the random id suffix
pub const ID_RANDOM_LEN: usize = 6;

const ID_TIME_LEN: usize = 14;

/// A persisted chat-log record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLog {
    /// Timestamp + random suffix, assigned at write time
    pub id: String,

    /// Chat content
    pub text: String,

    /// Classification label describing the validation outcome
    pub validation_result: String,

    /// Server-assigned write time, `YYYY-MM-DD HH:MM:SS.mmm`
    pub input_time: String,
}

/// A record before the store has stamped it
#[derive(Debug, Clone, Default)]
pub struct NewChatLog {
    pub text: String,
    pub validation_result: String,

    /// Pre-assigned id; a fresh one is generated when `None` or empty
    pub id: Option<String>,
}

impl NewChatLog {
    pub fn new(text: impl Into<String>, validation_result: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            validation_result: validation_result.into(),
            id: None,
        }
    }

    /// Stamp id and input time, producing the record to persist
    pub(crate) fn stamp(self, now: NaiveDateTime) -> ChatLog {
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => generate_id(now),
        };

        ChatLog {
            id,
            text: self.text,
            validation_result: self.validation_result,
            input_time: now.format(INPUT_TIME_FORMAT).to_string(),
        }
    }
}

/// Generate a record id for the given write time
///
/// "2024-01-01 08:30:00" → "20240101083000" + 6 random characters
pub fn generate_id(now: NaiveDateTime) -> String {
    let mut rng = rand::thread_rng();
    let mut id = now.format(ID_TIME_FORMAT).to_string();
    id.extend((0..ID_RANDOM_LEN).map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char));
    id
}

/// Check that a string has the shape produced by [`generate_id`]
pub fn is_valid_id(id: &str) -> bool {
    let bytes = id.as_bytes();
    if bytes.len() != ID_TIME_LEN + ID_RANDOM_LEN {
        return false;
    }

    let (time_part, random_part) = bytes.split_at(ID_TIME_LEN);
    time_part.iter().all(u8::is_ascii_digit) && random_part.iter().all(u8::is_ascii_alphanumeric)
}

/// Parse a strict `YYYY-MM-DD` calendar date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == s)
        .ok_or_else(|| ChatLogError::InvalidDate(s.to_string()))
}
