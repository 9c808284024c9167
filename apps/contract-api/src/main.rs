//! Contract API server - clause retrieval and risk analysis
//!
//! Provides REST endpoints for:
//! - Clause generation from free-text context
//! - Risk analysis of a clause
//! - Liveness

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use contract_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("contract_api=info".parse()?)
                .add_directive("clause_engine=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Load the corpus once; it is immutable for the process lifetime.
    info!("Initializing contract API...");
    let state = Arc::new(AppState::from_env());

    let app = contract_api::app(state);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting contract API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
