use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tally::endpoint::Endpoint;
use tally::log;

use crate::services::StoreError;

/// Handler for `GET /api/{endpoint}.json`
pub async fn get(State(state): State<Arc<crate::AppState>>, Path(file): Path<String>) -> Response {
    let Some(name) = file.strip_suffix(".json") else {
        return (StatusCode::NOT_FOUND, "Dataset not found").into_response();
    };

    let endpoint = match Endpoint::new(name) {
        Ok(endpoint) => endpoint,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };

    match state.datasets.get(&endpoint).await {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(StoreError::NotFound(_)) => {
            log::debug!("Dataset {} not found", endpoint);
            (StatusCode::NOT_FOUND, "Dataset not found").into_response()
        }
        Err(err) => {
            log::error!("Failed to load dataset {}: {}", endpoint, err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load dataset").into_response()
        }
    }
}
