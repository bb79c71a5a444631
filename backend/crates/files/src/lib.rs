//! Files Backend Module
//!
//! Image upload and retrieval:
//! - Multipart upload of a single `file` field
//! - Extension allow-list (jpg, jpeg, png, gif), 5 MB cap
//! - Disk storage under the configured upload directory
//! - Serving stored files with an extension-derived content type
//!
//! Kept deliberately small: the storage contract (names in, bytes out)
//! is the whole surface.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;

pub use config::FilesConfig;
pub use error::{FilesError, FilesResult};
pub use router::files_router;
