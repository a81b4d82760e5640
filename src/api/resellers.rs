//! Reseller endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::reseller::{CreateReseller, Reseller},
    AppState,
};

/// List resellers
#[utoipa::path(
    get,
    path = "/resellers",
    tag = "resellers",
    responses(
        (status = 200, description = "Registered resellers", body = Vec<Reseller>)
    )
)]
pub async fn list_resellers(State(state): State<AppState>) -> AppResult<Json<Vec<Reseller>>> {
    let resellers = state.services.resellers.list().await?;
    Ok(Json(resellers))
}

/// Register a reseller
#[utoipa::path(
    post,
    path = "/resellers",
    tag = "resellers",
    request_body = CreateReseller,
    responses(
        (status = 201, description = "Reseller registered", body = Reseller),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reseller(
    State(state): State<AppState>,
    Json(data): Json<CreateReseller>,
) -> AppResult<(StatusCode, Json<Reseller>)> {
    let reseller = state.services.resellers.create(data).await?;
    Ok((StatusCode::CREATED, Json(reseller)))
}

/// Remove a reseller
#[utoipa::path(
    delete,
    path = "/resellers/{id}",
    tag = "resellers",
    params(("id" = String, Path, description = "Reseller ID")),
    responses(
        (status = 204, description = "Reseller removed"),
        (status = 404, description = "Reseller not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_reseller(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.resellers.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
