// src/handlers/health.rs

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::store::SharedStore;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to Globetrotter API" }))
}

/// Reports store connectivity and corpus size. 503 when the store cannot be queried.
pub async fn health(State(store): State<SharedStore>) -> Response {
    match store.count_destinations().await {
        Ok(cities_count) => Json(json!({
            "status": "healthy",
            "database": "connected",
            "cities_count": cities_count,
        }))
        .into_response(),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "database": "disconnected",
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
