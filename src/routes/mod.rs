pub mod claims;
pub mod lost_items;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/lost_items",
            get(lost_items::list).post(lost_items::submit),
        )
        .route("/api/claims", get(claims::list))
}

/// Plain-text fallback for anything that is neither an API route nor a
/// static asset.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "API endpoint not found.")
}
