//! Request and response models for the contract API

use serde::{Deserialize, Serialize};

/// Request to generate a clause from free-text context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateClauseRequest {
    pub context: String,
}

/// Generated clause response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateClauseResponse {
    pub generated_clause: String,
}

/// Request to analyze a clause for risks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRiskRequest {
    pub clause: String,
}

/// Ordered risk findings response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRiskResponse {
    pub risk_analysis: Vec<String>,
}

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
