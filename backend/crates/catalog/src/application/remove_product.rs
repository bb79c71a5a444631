//! Remove Product Use Case
//!
//! Soft delete: Active -> Inactive. Resolves the visible row only, so
//! removing an already-removed id reports NotFound, consistent with
//! the lookup contract.

use std::sync::Arc;

use kernel::id::ProductId;

use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

/// Remove product use case
pub struct RemoveProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> RemoveProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, id: ProductId) -> CatalogResult<()> {
        let mut product = self
            .product_repo
            .find_active_by_id(&id)
            .await?
            .ok_or_else(|| CatalogError::ProductNotFound(id.into_uuid()))?;

        product.deactivate();
        self.product_repo.update(&product).await?;

        tracing::info!(
            product_id = %product.product_id,
            "Product soft-deleted"
        );

        Ok(())
    }
}
