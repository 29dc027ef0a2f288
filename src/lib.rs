pub mod claims;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use std::sync::Arc;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{HeaderName, HeaderValue};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::claims::SharedClaimsSource;
use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::store::SharedReportStore;

pub fn build_app(store: SharedReportStore, claims: SharedClaimsSource, config: Config) -> Router {
    let static_dir = config.static_dir.clone();
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        store,
        claims,
        config,
    });

    // The browser client may be served from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static assets live at the server root; anything that is neither a
    // route nor a file gets the plain-text 404.
    let assets = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(routes::not_found.into_service());

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .fallback_service(assets)
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
