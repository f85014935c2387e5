use axum::{extract::State, Json};
use std::sync::Arc;
use scr_core::RiskReport;
use crate::{ApiError, AppState};

/// Runs a fresh fetch-score cycle for every request.
pub async fn analyze_risks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RiskReport>>, ApiError> {
    let reports = state.aggregator.build_reports().await?;
    tracing::info!("📊 Returning {} risk reports", reports.len());
    Ok(Json(reports))
}
