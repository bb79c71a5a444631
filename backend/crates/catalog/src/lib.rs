//! Catalog Backend Module
//!
//! Products and categories with soft deletion, filtered/paginated
//! listing, and admin-gated mutations.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, the listing engine, repository traits
//! - `application/` - One use case per operation
//! - `infra/` - PostgreSQL implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Lifecycle Model
//! Each resource is either Active or Inactive. Inactive (soft-deleted)
//! rows stay in the store but disappear from every listing and lookup.
//! Updates resolve rows by id regardless of the flag, which doubles as
//! the reactivation path.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::{categories_router, products_router};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::listing::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCatalogRepository as CatalogStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
