//! Request definitions
//!
//! Represents request bodies and query strings from clients.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{ChatLogError, Result};
use crate::record::{parse_date, NewChatLog};

/// Body of `POST /logs`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLogRequest {
    /// Chat content (required, non-empty)
    pub text: String,

    /// Validation outcome; absent means `false`
    #[serde(default)]
    pub validation_result: ValidationInput,
}

/// A validation outcome as sent by clients
///
/// Booleans are stored as the literal strings "true" / "false";
/// string labels are stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ValidationInput {
    Flag(bool),
    Label(String),
}

impl Default for ValidationInput {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl ValidationInput {
    /// The string persisted in `validation_result`
    pub fn into_stored(self) -> String {
        match self {
            Self::Flag(flag) => flag.to_string(),
            Self::Label(label) => label,
        }
    }
}

impl CreateLogRequest {
    /// Validate and convert into a record for the store
    pub fn into_new_log(self) -> Result<NewChatLog> {
        if self.text.is_empty() {
            return Err(ChatLogError::InvalidInput("text is required".to_string()));
        }
        Ok(NewChatLog::new(self.text, self.validation_result.into_stored()))
    }
}

/// Query string of `GET /logs`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetLogsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl GetLogsQuery {
    /// Parse both bounds; empty values count as unset
    pub fn date_range(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>)> {
        Ok((parse_bound(&self.start_date)?, parse_bound(&self.end_date)?))
    }
}

fn parse_bound(value: &Option<String>) -> Result<Option<NaiveDate>> {
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s).map(Some),
    }
}
