//! Shared Kernel - Domain-crossing minimal core
//!
//! The "smallest core" of vocabulary shared by every feature crate:
//! - Unified error type, error kinds, and result aliases
//! - Typed entity ID wrappers
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains (auth, catalog, files).

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
