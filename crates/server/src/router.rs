//! HTTP router construction.
//!
//! Assembles all Axum routes, middleware, and OpenAPI docs into a single `Router`.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::api;
use crate::state::AppState;

/// Symptom descriptions are short; anything larger is rejected before parsing.
pub const CHECK_BODY_LIMIT: usize = 64 * 1024;

/// Build the complete application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route(
            "/check",
            post(api::check).layer(DefaultBodyLimit::max(CHECK_BODY_LIMIT)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(Scalar::with_url("/docs", api::doc::ApiDoc::openapi()))
}
