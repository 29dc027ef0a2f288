use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::store::StoreError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Storage {
        context: &'static str,
        source: StoreError,
    },
}

impl AppError {
    /// Wrap a storage failure with the generic message the client sees.
    pub fn storage(context: &'static str, source: StoreError) -> Self {
        AppError::Storage { context, source }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Storage { context, source } => write!(f, "{context} ({source})"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Storage { context, source } => {
                // Full detail stays in the log; the client gets the generic message.
                tracing::error!("Storage error: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
        };

        let body = json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}
