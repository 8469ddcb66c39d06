//! Ledger Error Types
//!
//! This module provides ledger-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use crate::domain::value_object::TransactionStatus;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Ledger-specific result type alias
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-specific error variants
///
/// The first four are the settlement interface's failure outcomes; each
/// carries its fixed human-readable message and maps to a distinct HTTP
/// status through `AppError`.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No transaction with the given ID
    #[error("Invalid transaction ID.")]
    NotFound,

    /// The transaction was already settled (idempotence conflict)
    #[error("Transaction is already {0}.")]
    AlreadySettled(TransactionStatus),

    /// Approved withdrawal exceeds the owner's available balance
    #[error("Insufficient user balance for withdrawal.")]
    InsufficientFunds,

    /// Unrecognized decision token (field keeps the offending input for logs)
    #[error("Invalid action or transaction ID.")]
    InvalidDecision(String),

    /// Unrecognized listing filter token
    #[error("Invalid filter value: {0}")]
    InvalidFilter(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LedgerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            LedgerError::NotFound => StatusCode::NOT_FOUND,
            LedgerError::AlreadySettled(_) => StatusCode::CONFLICT,
            LedgerError::InsufficientFunds => StatusCode::UNPROCESSABLE_ENTITY,
            LedgerError::InvalidDecision(_) | LedgerError::InvalidFilter(_) => {
                StatusCode::BAD_REQUEST
            }
            LedgerError::Database(_) | LedgerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::NotFound => ErrorKind::NotFound,
            LedgerError::AlreadySettled(_) => ErrorKind::Conflict,
            LedgerError::InsufficientFunds => ErrorKind::UnprocessableEntity,
            LedgerError::InvalidDecision(_) | LedgerError::InvalidFilter(_) => {
                ErrorKind::BadRequest
            }
            LedgerError::Database(_) | LedgerError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            LedgerError::Database(e) => {
                tracing::error!(error = %e, "Ledger database error");
            }
            LedgerError::Internal(msg) => {
                tracing::error!(message = %msg, "Ledger internal error");
            }
            LedgerError::AlreadySettled(status) => {
                tracing::warn!(status = %status, "Settlement rejected: already settled");
            }
            LedgerError::InsufficientFunds => {
                tracing::warn!("Settlement rejected: insufficient funds");
            }
            LedgerError::InvalidDecision(token) => {
                tracing::debug!(token = %token, "Settlement rejected: unknown decision token");
            }
            _ => {
                tracing::debug!(error = %self, "Ledger error");
            }
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        self.log();
        // Delegate body shape (problem+json) to the unified error type.
        // Store details never reach the client: Database/Internal render
        // as a generic 500 message.
        let app_error = match self {
            LedgerError::Database(_) | LedgerError::Internal(_) => AppError::new(
                ErrorKind::InternalServerError,
                "An internal error occurred.",
            ),
            other => AppError::from(other),
        };
        app_error.into_response()
    }
}
