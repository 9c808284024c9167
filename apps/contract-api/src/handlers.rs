//! HTTP handlers for the contract API
//!
//! Handlers are infallible: every request gets a 200 with a normal
//! body, and engine degradation (empty corpus, internal fault) appears
//! only as sentinel content inside that body.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::models::*;
use crate::state::AppState;

/// Liveness endpoint
pub async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "AI service is running".to_string(),
    })
}

/// Generate a contract clause based on provided context
pub async fn generate_clause(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateClauseRequest>,
) -> Json<GenerateClauseResponse> {
    tracing::debug!(context = %req.context, "generate-clause request");

    Json(GenerateClauseResponse {
        generated_clause: state.engine.generate_clause(&req.context),
    })
}

/// Analyze a clause for potential risks using dataset annotations and
/// keyword heuristics
pub async fn analyze_risk(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRiskRequest>,
) -> Json<AnalyzeRiskResponse> {
    tracing::debug!(clause = %req.clause, "analyze-risk request");

    let risk_analysis = state
        .engine
        .analyze_risk(&req.clause)
        .into_iter()
        .map(|finding| finding.message)
        .collect();

    Json(AnalyzeRiskResponse { risk_analysis })
}
