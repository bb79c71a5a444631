//! HTTP Handlers

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

use crate::config::{ALLOWED_EXTENSIONS, FilesConfig, MAX_FILE_SIZE};
use crate::error::{FilesError, FilesResult};

/// Shared state for files handlers
#[derive(Clone)]
pub struct FilesAppState {
    pub config: Arc<FilesConfig>,
}

/// Upload response
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub path: String,
}

// ============================================================================
// Upload
// ============================================================================

/// POST /api/files/upload
pub async fn upload(
    State(state): State<FilesAppState>,
    mut multipart: Multipart,
) -> FilesResult<Json<UploadResponse>> {
    let field = loop {
        match multipart
            .next_field()
            .await
            .map_err(|e| FilesError::InvalidBody(e.to_string()))?
        {
            Some(field) if field.name() == Some("file") => break field,
            Some(_) => continue,
            None => return Err(FilesError::MissingFile),
        }
    };

    let original_name = field.file_name().ok_or(FilesError::MissingFile)?;
    let extension = allowed_extension(original_name).ok_or(FilesError::InvalidFileType)?;

    let data = field
        .bytes()
        .await
        .map_err(|e| FilesError::InvalidBody(e.to_string()))?;
    if data.len() > MAX_FILE_SIZE {
        return Err(FilesError::TooLarge);
    }

    let filename = unique_filename(extension);

    tokio::fs::create_dir_all(&state.config.upload_dir).await?;
    tokio::fs::write(state.config.upload_dir.join(&filename), &data).await?;

    tracing::info!(
        filename = %filename,
        size = data.len(),
        "File uploaded"
    );

    Ok(Json(UploadResponse {
        path: format!("/files/{}", filename),
        filename,
    }))
}

// ============================================================================
// Serve
// ============================================================================

/// GET /api/files/{filename}
pub async fn serve(
    State(state): State<FilesAppState>,
    Path(filename): Path<String>,
) -> FilesResult<Response> {
    // Plain names only; anything path-like is treated as a miss
    if !is_plain_filename(&filename) {
        return Err(FilesError::NotFound);
    }

    let path = state.config.upload_dir.join(&filename);
    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(FilesError::NotFound);
        }
        Err(e) => return Err(e.into()),
    };

    let content_type = content_type_for(&filename);

    Ok((
        [(header::CONTENT_TYPE, content_type)],
        Body::from(data),
    )
        .into_response())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Return the allow-listed extension (with dot) of a filename, if any
fn allowed_extension(filename: &str) -> Option<&'static str> {
    let lowered = filename.to_lowercase();
    ALLOWED_EXTENSIONS
        .iter()
        .find(|ext| lowered.ends_with(*ext))
        .copied()
}

/// `file-<millis>-<random><ext>`, matching the upload naming scheme
fn unique_filename(extension: &str) -> String {
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
    format!("file-{}-{}{}", Utc::now().timestamp_millis(), suffix, extension)
}

/// Reject separators, traversal, and hidden names
fn is_plain_filename(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains("..")
}

/// Content type from the file extension
fn content_type_for(filename: &str) -> &'static str {
    let lowered = filename.to_lowercase();
    if lowered.ends_with(".jpg") || lowered.ends_with(".jpeg") {
        "image/jpeg"
    } else if lowered.ends_with(".png") {
        "image/png"
    } else if lowered.ends_with(".gif") {
        "image/gif"
    } else {
        "application/octet-stream"
    }
}
