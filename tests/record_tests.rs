//! Tests for record definitions
//!
//! These tests verify:
//! - Id generation format
//! - Strict date parsing
//! - Request conversion into new records

use chatlog::protocol::{CreateLogRequest, GetLogsQuery, ValidationInput};
use chatlog::record::{generate_id, is_valid_id, parse_date, ID_CHARSET};
use chatlog::{ChatLog, ChatLogError};
use chrono::NaiveDate;

// =============================================================================
// Id Tests
// =============================================================================

#[test]
fn test_generate_id_format() {
    let now = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(7, 8, 9)
        .unwrap();

    let id = generate_id(now);

    assert_eq!(id.len(), 20);
    assert!(id.starts_with("20240101070809"));
    assert!(id[14..].bytes().all(|b| ID_CHARSET.contains(&b)));
    assert!(is_valid_id(&id));
}

#[test]
fn test_generate_id_suffix_varies() {
    let now = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let ids: std::collections::HashSet<_> = (0..50).map(|_| generate_id(now)).collect();

    assert!(ids.len() > 1);
}

#[test]
fn test_is_valid_id_rejects_bad_shapes() {
    assert!(!is_valid_id(""));
    assert!(!is_valid_id("20240101070809abcde"));
    assert!(!is_valid_id("20240101070809abcdefg"));
    assert!(!is_valid_id("2024010107080Xabcdef"));
    assert!(!is_valid_id("20240101070809abc-ef"));
    assert!(is_valid_id("20240101070809aZ09yY"));
}

// =============================================================================
// Date Parsing Tests
// =============================================================================

#[test]
fn test_parse_date_valid() {
    assert_eq!(parse_date("2024-01-01").unwrap(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(parse_date("2024-02-29").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
}

#[test]
fn test_parse_date_rejects_malformed() {
    for input in ["2024-13-40", "2023-02-29", "2024-1-1", "20240101", "2024-01-01T00:00:00", "", "yesterday"] {
        assert!(
            matches!(parse_date(input), Err(ChatLogError::InvalidDate(_))),
            "accepted {input:?}"
        );
    }
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_chat_log_field_names() {
    let record = ChatLog {
        id: "20240101000000abcdef".to_string(),
        text: "hello".to_string(),
        validation_result: "true".to_string(),
        input_time: "2024-01-01 00:00:00.000".to_string(),
    };

    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "id": "20240101000000abcdef",
            "text": "hello",
            "validation_result": "true",
            "input_time": "2024-01-01 00:00:00.000",
        })
    );
}

// =============================================================================
// Request Conversion Tests
// =============================================================================

#[test]
fn test_validation_input_mapping() {
    let flag: CreateLogRequest = serde_json::from_str(r#"{"text":"a","validation_result":true}"#).unwrap();
    let label: CreateLogRequest = serde_json::from_str(r#"{"text":"a","validation_result":"不涉密"}"#).unwrap();
    let missing: CreateLogRequest = serde_json::from_str(r#"{"text":"a"}"#).unwrap();

    assert_eq!(flag.validation_result, ValidationInput::Flag(true));
    assert_eq!(flag.into_new_log().unwrap().validation_result, "true");
    assert_eq!(label.into_new_log().unwrap().validation_result, "不涉密");
    assert_eq!(missing.into_new_log().unwrap().validation_result, "false");
}

#[test]
fn test_request_without_text_rejected() {
    let empty: CreateLogRequest = serde_json::from_str(r#"{"text":"","validation_result":true}"#).unwrap();

    assert!(matches!(empty.into_new_log(), Err(ChatLogError::InvalidInput(_))));
    assert!(serde_json::from_str::<CreateLogRequest>(r#"{"validation_result":true}"#).is_err());
}

#[test]
fn test_query_bounds_parsing() {
    let query = GetLogsQuery {
        start_date: Some(String::new()),
        end_date: Some("2024-01-07".to_string()),
    };
    let (start, end) = query.date_range().unwrap();
    assert_eq!(start, None);
    assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 7));

    let bad = GetLogsQuery {
        start_date: Some("2024-13-40".to_string()),
        end_date: None,
    };
    assert!(matches!(bad.date_range(), Err(ChatLogError::InvalidDate(_))));
}
