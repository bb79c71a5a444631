//! Get Product Use Case
//!
//! Single-item lookup. Inactive rows are invisible here, matching the
//! listing engine's implicit active filter.

use std::sync::Arc;

use kernel::id::ProductId;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

/// Get product use case
pub struct GetProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> GetProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, id: ProductId) -> CatalogResult<Product> {
        self.product_repo
            .find_active_by_id(&id)
            .await?
            .ok_or_else(|| CatalogError::ProductNotFound(id.into_uuid()))
    }
}
