//! Files Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Files-specific result type alias
pub type FilesResult<T> = Result<T, FilesError>;

/// Files-specific error variants
#[derive(Debug, Error)]
pub enum FilesError {
    /// Upload is missing the `file` multipart field
    #[error("Missing \"file\" field in multipart body")]
    MissingFile,

    /// Extension outside the allow-list
    #[error("Only image files are allowed (jpg, jpeg, png, gif)")]
    InvalidFileType,

    /// Upload exceeds the size cap
    #[error("File exceeds the 5 MB size limit")]
    TooLarge,

    /// Malformed multipart body
    #[error("Invalid multipart body: {0}")]
    InvalidBody(String),

    /// Requested filename does not exist (or is not a plain name)
    #[error("File not found")]
    NotFound,

    /// Filesystem error
    #[error("File storage error: {0}")]
    Io(#[from] std::io::Error),
}

impl FilesError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            FilesError::MissingFile
            | FilesError::InvalidFileType
            | FilesError::TooLarge
            | FilesError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            FilesError::NotFound => StatusCode::NOT_FOUND,
            FilesError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FilesError::MissingFile
            | FilesError::InvalidFileType
            | FilesError::TooLarge
            | FilesError::InvalidBody(_) => ErrorKind::BadRequest,
            FilesError::NotFound => ErrorKind::NotFound,
            FilesError::Io(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            FilesError::Io(e) => {
                tracing::error!(error = %e, "File storage error");
            }
            _ => {
                tracing::debug!(error = %self, "Files error");
            }
        }
    }
}

impl IntoResponse for FilesError {
    fn into_response(self) -> Response {
        self.log();
        AppError::new(self.kind(), self.to_string()).into_response()
    }
}
