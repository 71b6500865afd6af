use std::sync::Arc;

use axum::{Json, extract::State};
use tally::data::{HealthResponse, HealthStatus};
use tally::log;

pub async fn get(State(state): State<Arc<crate::AppState>>) -> Json<HealthResponse> {
    let datasets = state
        .datasets
        .list()
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|endpoint| endpoint.to_string())
        .collect();

    let health_response = HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now().to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        datasets,
    };

    log::debug!("Health check: {:?}", health_response);

    Json(health_response)
}
