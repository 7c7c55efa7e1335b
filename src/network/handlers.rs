//! Request Handlers
//!
//! Decode requests, call the store, encode the response envelope.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::error::ChatLogError;
use crate::protocol::{CreateLogRequest, GetLogsQuery, LogResponse};
use crate::record::ChatLog;
use crate::store::LogStore;

/// Handler failures, split by who is at fault
#[derive(Debug)]
pub(super) enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    fn from_store(context: &str, err: ChatLogError) -> Self {
        if err.is_client_error() {
            Self::BadRequest(format!("{context}: {err}"))
        } else {
            Self::Internal(format!("{context}: {err}"))
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => {
                tracing::error!("Request failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(LogResponse::error(status.as_u16(), message))).into_response()
    }
}

/// `POST /api/v1/logs`
pub(super) async fn create_log(
    State(store): State<Arc<LogStore>>,
    payload: Result<Json<CreateLogRequest>, JsonRejection>,
) -> Result<Json<LogResponse<ChatLog>>, ApiError> {
    let Json(request) = payload
        .map_err(|rejection| ApiError::BadRequest(format!("invalid request body: {}", rejection.body_text())))?;

    let entry = request
        .into_new_log()
        .map_err(|e| ApiError::BadRequest(format!("invalid request body: {e}")))?;

    let record = tokio::task::spawn_blocking(move || store.append(entry))
        .await
        .map_err(|e| ApiError::Internal(format!("failed to save log: {e}")))?
        .map_err(|e| ApiError::from_store("failed to save log", e))?;

    Ok(Json(LogResponse::ok("log saved", record)))
}

/// `GET /api/v1/logs`
pub(super) async fn get_logs(
    State(store): State<Arc<LogStore>>,
    query: Result<Query<GetLogsQuery>, QueryRejection>,
) -> Result<Json<LogResponse<Vec<ChatLog>>>, ApiError> {
    let Query(query) = query
        .map_err(|rejection| ApiError::BadRequest(format!("invalid query parameters: {}", rejection.body_text())))?;

    let (start, end) = query
        .date_range()
        .map_err(|e| ApiError::BadRequest(format!("invalid query parameters: {e}")))?;

    let records = tokio::task::spawn_blocking(move || store.query(start, end))
        .await
        .map_err(|e| ApiError::Internal(format!("failed to fetch logs: {e}")))?
        .map_err(|e| ApiError::from_store("failed to fetch logs", e))?;

    Ok(Json(LogResponse::ok("logs fetched", records)))
}

/// `GET /health`
pub(super) async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
    }))
}
