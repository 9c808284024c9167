//! Contract API - HTTP wrapper around the clause engine
//!
//! Thin transport layer: all matching and scoring semantics live in
//! `clause-engine`; handlers here only translate between JSON bodies
//! and engine calls. Both endpoints always answer 200; engine-level
//! degradation shows up as sentinel content, never as an error status.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod models;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    // Browser clients call this directly, so CORS stays permissive.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Liveness
        .route("/", get(handlers::root))
        // Engine endpoints
        .route("/generate-clause", post(handlers::generate_clause))
        .route("/analyze-risk", post(handlers::analyze_risk))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
