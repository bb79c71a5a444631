//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CatalogAppState;
pub use router::{
    WRITE_ROLES, categories_router, categories_router_generic, products_router,
    products_router_generic,
};
