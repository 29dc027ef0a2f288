use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::{LostItemReport, NewLostItem};
use crate::state::SharedState;

pub async fn list(
    State(state): State<SharedState>,
) -> Result<Json<Vec<LostItemReport>>, AppError> {
    let items = state
        .store
        .list_newest_first()
        .await
        .map_err(|e| AppError::storage("Failed to retrieve items from database.", e))?;

    Ok(Json(items))
}

pub async fn submit(
    State(state): State<SharedState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let item = NewLostItem::from_payload(&payload)
        .ok_or_else(|| AppError::BadRequest("Missing required fields.".to_string()))?;

    let stored = state
        .store
        .insert(&item)
        .await
        .map_err(|e| AppError::storage("Failed to insert item into database.", e))?;

    tracing::debug!("Stored lost-item report {}", stored.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Item reported successfully.",
            "itemId": stored.id,
        })),
    ))
}
