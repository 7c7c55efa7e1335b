//! Protocol Module
//!
//! Request and response bodies of the HTTP API.
//!
//! ## Request Format
//! ```text
//! POST /api/v1/logs   {"text": "...", "validation_result": true}
//! GET  /api/v1/logs?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD
//! ```
//!
//! ## Response Format
//! ```text
//! {"code": 200, "message": "...", "data": ...}
//! ```
//!
//! `code` mirrors the HTTP status; `data` is omitted on failure.

mod request;
mod response;

pub use request::{CreateLogRequest, GetLogsQuery, ValidationInput};
pub use response::LogResponse;
