//! Files Router

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;

use crate::config::{FilesConfig, MAX_FILE_SIZE};
use crate::handlers::{self, FilesAppState};

/// Create the files router
pub fn files_router(config: FilesConfig) -> Router {
    let state = FilesAppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/upload", post(handlers::upload))
        .route("/{filename}", get(handlers::serve))
        // Leave headroom above the file cap for multipart framing
        .layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 64 * 1024))
        .with_state(state)
}
