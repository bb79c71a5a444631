//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{ADMIN_ONLY, ANY_AUTHENTICATED, Principal, RoleGuard, authorize, require_roles};
pub use router::{auth_router, auth_router_generic};
