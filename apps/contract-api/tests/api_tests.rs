//! End-to-end tests for the contract API router
//!
//! Drives the full axum router with in-memory requests and checks the
//! wire-level request/response contract.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use clause_engine::{Corpus, EMPTY_CORPUS_CLAUSE};
use contract_api::state::AppState;
use contract_types::Document;

fn app_with_texts(texts: &[&str]) -> Router {
    let documents = texts
        .iter()
        .enumerate()
        .map(|(i, text)| Document::new(format!("doc-{i}"), *text))
        .collect();
    let state = Arc::new(AppState::with_corpus(Corpus::from_documents(documents)));
    contract_api::app(state)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let parsed = serde_json::from_slice(&bytes).unwrap();
    (status, parsed)
}

#[tokio::test]
async fn liveness_endpoint_answers() {
    let app = app_with_texts(&[]);
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "AI service is running");
}

#[tokio::test]
async fn generate_clause_returns_document_text() {
    let app = app_with_texts(&["All Confidential Information must be protected."]);
    let (status, body) = post_json(
        app,
        "/generate-clause",
        json!({"context": "I need a confidential clause"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["generated_clause"],
        "All Confidential Information must be protected."
    );
}

#[tokio::test]
async fn generate_clause_empty_corpus_still_succeeds() {
    let app = app_with_texts(&[]);
    let (status, body) = post_json(app, "/generate-clause", json!({"context": "whatever"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["generated_clause"], EMPTY_CORPUS_CLAUSE);
}

#[tokio::test]
async fn analyze_risk_returns_ordered_strings() {
    let app = app_with_texts(&[]);
    let (status, body) = post_json(
        app,
        "/analyze-risk",
        json!({"clause": "breach of the confidential payment plan"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["risk_analysis"],
        json!([
            "Risk detected: contains 'breach'",
            "Safe clause: contains 'confidential'",
            "Safe clause: contains 'payment'",
        ])
    );
}

#[tokio::test]
async fn analyze_risk_falls_back_when_nothing_fires() {
    let app = app_with_texts(&[]);
    let (status, body) = post_json(
        app,
        "/analyze-risk",
        json!({"clause": "the parties shall cooperate in good faith"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_analysis"], json!(["No obvious risks found"]));
}
