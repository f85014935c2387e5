use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub const ANALYZE_RISKS_PATH: &str = "/analyze_risks";

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route(ANALYZE_RISKS_PATH, get(handlers::analyze_risks))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds `addr` and serves the report endpoint until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("🌐 Serving risk reports on http://{}{}", listener.local_addr()?, ANALYZE_RISKS_PATH);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use scr_core::{Error, Result, RiskReport};
    pub use crate::AppState;
}
