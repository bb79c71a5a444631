//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;
use uuid::Uuid;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Product id does not resolve to a visible row
    #[error("Product with ID \"{0}\" not found")]
    ProductNotFound(Uuid),

    /// Category id does not resolve to a visible row
    #[error("Category with ID \"{0}\" not found")]
    CategoryNotFound(Uuid),

    /// Product name already in use (exact, case-sensitive)
    #[error("Product with name \"{0}\" already exists")]
    ProductNameTaken(String),

    /// Category name already in use (exact, case-sensitive)
    #[error("Category with name \"{0}\" already exists")]
    CategoryNameTaken(String),

    /// Request input failed boundary validation
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::ProductNotFound(_) | CatalogError::CategoryNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            CatalogError::ProductNameTaken(_) | CatalogError::CategoryNameTaken(_) => {
                StatusCode::CONFLICT
            }
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::ProductNotFound(_) | CatalogError::CategoryNotFound(_) => {
                ErrorKind::NotFound
            }
            CatalogError::ProductNameTaken(_) | CatalogError::CategoryNameTaken(_) => {
                ErrorKind::Conflict
            }
            CatalogError::Validation(_) => ErrorKind::BadRequest,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError, consuming the original
    ///
    /// Database errors go through the kernel conversion so constraint
    /// violations keep their mapping (unique violation -> Conflict).
    pub fn into_app_error(self) -> AppError {
        match self {
            CatalogError::Database(e) => AppError::from(e),
            CatalogError::Validation(errors) => AppError::bad_request("Validation failed")
                .with_details(serde_json::json!(errors)),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

/// Check whether a sqlx error is a unique-constraint violation
///
/// A concurrent create racing on a unique name can pass the pre-check
/// and still fail at persistence time; callers surface that as the
/// same Conflict the pre-check produces.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
