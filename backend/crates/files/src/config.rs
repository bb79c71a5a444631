//! Files Configuration

use std::path::PathBuf;

/// Extensions accepted for upload, lowercase with the leading dot
pub const ALLOWED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif"];

/// Maximum upload size: 5 MB
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Files application configuration
#[derive(Debug, Clone)]
pub struct FilesConfig {
    /// Directory uploads are written to
    pub upload_dir: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("./uploads"),
        }
    }
}

impl FilesConfig {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }
}
