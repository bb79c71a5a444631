//! Update Product Use Case
//!
//! Partial merge: only supplied fields are overwritten. The row is
//! resolved by id without re-checking its active state, so a PATCH
//! with `isActive: true` recovers a soft-deleted product.

use std::sync::Arc;

use kernel::id::ProductId;

use crate::domain::entity::product::{Product, ProductPatch};
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult, is_unique_violation};

/// Update product use case
pub struct UpdateProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> UpdateProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, id: ProductId, patch: ProductPatch) -> CatalogResult<Product> {
        let mut product = self
            .product_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| CatalogError::ProductNotFound(id.into_uuid()))?;

        product.apply(patch);

        // A renamed product can collide with an existing name; the
        // unique index reports it
        if let Err(e) = self.product_repo.update(&product).await {
            return Err(match e {
                CatalogError::Database(db) if is_unique_violation(&db) => {
                    CatalogError::ProductNameTaken(product.name)
                }
                other => other,
            });
        }

        tracing::info!(
            product_id = %product.product_id,
            "Product updated"
        );

        Ok(product)
    }
}
