//! Backoffice Error Types
//!
//! This module provides backoffice-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use crate::domain::value_object::AccountStatus;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Backoffice-specific result type alias
pub type BackofficeResult<T> = Result<T, BackofficeError>;

/// Backoffice-specific error variants
///
/// Each variant carries its fixed human-readable message and maps to a
/// distinct HTTP status through `AppError`.
#[derive(Debug, Error)]
pub enum BackofficeError {
    /// No user with the given ID
    #[error("Invalid user ID.")]
    UserNotFound,

    /// Verify requested for an account that is already active
    #[error("User is already verified.")]
    AlreadyVerified,

    /// Suspend/reinstate requested for an account already in that state
    #[error("User is already {0}.")]
    AlreadyInStatus(AccountStatus),

    /// Unrecognized moderation action token (field kept for logs)
    #[error("Invalid action or user ID.")]
    InvalidAction(String),

    /// No referral with the given ID
    #[error("Referral not found.")]
    ReferralNotFound,

    /// Unrecognized referral status token (field kept for logs)
    #[error("Invalid referral ID or status.")]
    InvalidStatusToken(String),

    /// Package draft failed validation
    #[error("Please fill in all fields correctly.")]
    PackageValidation,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackofficeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BackofficeError::UserNotFound | BackofficeError::ReferralNotFound => {
                StatusCode::NOT_FOUND
            }
            BackofficeError::AlreadyVerified | BackofficeError::AlreadyInStatus(_) => {
                StatusCode::CONFLICT
            }
            BackofficeError::InvalidAction(_) | BackofficeError::InvalidStatusToken(_) => {
                StatusCode::BAD_REQUEST
            }
            BackofficeError::PackageValidation => StatusCode::UNPROCESSABLE_ENTITY,
            BackofficeError::Database(_) | BackofficeError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BackofficeError::UserNotFound | BackofficeError::ReferralNotFound => {
                ErrorKind::NotFound
            }
            BackofficeError::AlreadyVerified | BackofficeError::AlreadyInStatus(_) => {
                ErrorKind::Conflict
            }
            BackofficeError::InvalidAction(_) | BackofficeError::InvalidStatusToken(_) => {
                ErrorKind::BadRequest
            }
            BackofficeError::PackageValidation => ErrorKind::UnprocessableEntity,
            BackofficeError::Database(_) | BackofficeError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BackofficeError::Database(e) => {
                tracing::error!(error = %e, "Backoffice database error");
            }
            BackofficeError::Internal(msg) => {
                tracing::error!(message = %msg, "Backoffice internal error");
            }
            BackofficeError::AlreadyVerified => {
                tracing::warn!("Moderation rejected: user already verified");
            }
            BackofficeError::AlreadyInStatus(status) => {
                tracing::warn!(status = %status, "Moderation rejected: user already in status");
            }
            BackofficeError::InvalidAction(token) => {
                tracing::debug!(token = %token, "Moderation rejected: unknown action token");
            }
            BackofficeError::InvalidStatusToken(token) => {
                tracing::debug!(token = %token, "Referral update rejected: unknown status token");
            }
            _ => {
                tracing::debug!(error = %self, "Backoffice error");
            }
        }
    }
}

impl From<BackofficeError> for AppError {
    fn from(err: BackofficeError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for BackofficeError {
    fn into_response(self) -> Response {
        self.log();
        // Store details never reach the client: Database/Internal render
        // as a generic 500 message.
        let app_error = match self {
            BackofficeError::Database(_) | BackofficeError::Internal(_) => {
                AppError::new(ErrorKind::InternalServerError, "An internal error occurred.")
            }
            other => AppError::from(other),
        };
        app_error.into_response()
    }
}
