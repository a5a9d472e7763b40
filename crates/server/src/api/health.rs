//! Health check endpoint.

use axum::{Extension, Json};

use crate::AppResources;
use crate::error::ApiError;
use crate::response::{ErrorResponse, StatusResponse};

/// Tag for OpenAPI documentation.
pub const MISC_TAG: &str = "Miscellaneous";

/// Health check endpoint.
#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/health",
    tag = MISC_TAG,
    operation_id = "Health Check",
    summary = "Database connectivity check",
    description = "Runs `SELECT 1` against the database.\n\n\
                   Returns 500 with the driver's error text when the database cannot be reached.",
    responses(
        (status = 200, description = "Database is reachable", body = StatusResponse, example = json!({"status": "ok"})),
        (status = 500, description = "Database is unreachable", body = ErrorResponse)
    )
)]
pub async fn health(
    Extension(resources): Extension<AppResources>,
) -> Result<Json<StatusResponse>, ApiError> {
    resources
        .gateway
        .probe()
        .await
        .map_err(ApiError::HealthProbe)?;
    Ok(Json(StatusResponse::ok()))
}
