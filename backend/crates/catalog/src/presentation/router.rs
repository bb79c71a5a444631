//! Catalog Routers
//!
//! Read operations are public; every mutation is gated by the
//! declarative role table below, enforced by the auth middleware
//! before dispatch.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, post},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::value_object::user_role::UserRole;
use auth::presentation::middleware::{RoleGuard, require_roles};

use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Operation -> required-role table: Create/Update/SoftDelete on both
/// catalog resources require admin; list and get-one are open.
pub const WRITE_ROLES: &[UserRole] = &[UserRole::Admin];

/// Create the products router with PostgreSQL repository
pub fn products_router(repo: PgCatalogRepository, config: Arc<AuthConfig>) -> Router {
    products_router_generic(repo, config)
}

/// Create a generic products router for any repository implementation
pub fn products_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };
    let admin = RoleGuard::new(config, WRITE_ROLES);

    let reads = Router::new()
        .route("/", get(handlers::list_products::<R>))
        .route("/search", get(handlers::search_products::<R>))
        .route("/{id}", get(handlers::get_product::<R>));

    let writes = Router::new()
        .route("/", post(handlers::create_product::<R>))
        .route(
            "/{id}",
            patch(handlers::update_product::<R>).delete(handlers::remove_product::<R>),
        )
        .route_layer(from_fn_with_state(admin, require_roles));

    reads.merge(writes).with_state(state)
}

/// Create the categories router with PostgreSQL repository
pub fn categories_router(repo: PgCatalogRepository, config: Arc<AuthConfig>) -> Router {
    categories_router_generic(repo, config)
}

/// Create a generic categories router for any repository implementation
pub fn categories_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };
    let admin = RoleGuard::new(config, WRITE_ROLES);

    let reads = Router::new()
        .route("/", get(handlers::list_categories::<R>))
        .route("/{id}", get(handlers::get_category::<R>));

    let writes = Router::new()
        .route("/", post(handlers::create_category::<R>))
        .route(
            "/{id}",
            patch(handlers::update_category::<R>).delete(handlers::remove_category::<R>),
        )
        .route_layer(from_fn_with_state(admin, require_roles));

    reads.merge(writes).with_state(state)
}
