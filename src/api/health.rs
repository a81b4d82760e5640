//! Health check endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Salon this instance serves
    pub salon: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        salon: state.config.salon.name.clone(),
    })
}

/// Readiness check endpoint (salon configuration is readable and consistent)
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = HealthResponse),
        (status = 500, description = "Stored configuration is inconsistent", body = crate::error::ErrorResponse)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    state.services.schedules.get_config().await?;
    Ok(Json(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        salon: state.config.salon.name.clone(),
    }))
}
