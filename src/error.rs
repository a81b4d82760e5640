//! Error types for the salon server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Numeric error codes returned alongside every error response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    BadValue = 2,
    NoSuchData = 3,
    ClosedDay = 4,
    RuleViolation = 5,
    SubmissionPending = 6,
    PersistenceFailure = 7,
    ConfigurationInconsistency = 8,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Rejected user input (past slot, outside window, missing field...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Booking attempted on a weekday the salon does not open
    #[error("The salon is closed on {day}. Please choose another day.")]
    ClosedDay { day: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// A submission for the same session is already in flight
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The storage collaborator rejected a create/update call
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// The stored salon configuration is inconsistent
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the user can fix the problem by changing their input
    pub fn is_validation_rejection(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::ClosedDay { .. } | AppError::BusinessRule(_)
        )
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::ClosedDay { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::ClosedDay, self.to_string())
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone())
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::BusinessRule(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::RuleViolation, msg.clone())
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorCode::SubmissionPending, msg.clone())
            }
            AppError::Persistence(msg) => {
                tracing::error!("Persistence error: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorCode::PersistenceFailure,
                    "Could not save your request, please try again".to_string(),
                )
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::ConfigurationInconsistency,
                    msg.clone(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
