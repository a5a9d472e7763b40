use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::response::ErrorResponse;

/// The only failure the persistence layer reports: the database could not be reached
/// or refused to run the statement.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DatabaseUnavailable(#[from] pub DbErr);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Database connection failed")]
    Database(#[from] DatabaseUnavailable),
    /// Like [`ApiError::Database`], but the message carries the driver's error text.
    #[error("Database connection failed: {0}")]
    HealthProbe(DatabaseUnavailable),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Database(_) | ApiError::HealthProbe(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let cause = match &self {
            ApiError::Database(e) | ApiError::HealthProbe(e) => e,
        };
        tracing::error!(error = %cause, "database unavailable");

        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
