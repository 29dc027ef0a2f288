use axum::Json;
use axum::extract::State;

use crate::error::AppError;
use crate::models::ClaimTicket;
use crate::state::SharedState;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<ClaimTicket>>, AppError> {
    let tickets = state
        .claims
        .list()
        .await
        .map_err(|e| AppError::storage("Failed to retrieve claims.", e))?;

    Ok(Json(tickets))
}
