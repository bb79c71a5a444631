//! Create Product Use Case

use std::sync::Arc;

use crate::domain::entity::product::{NewProduct, Product};
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult, is_unique_violation};

/// Create product use case
pub struct CreateProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> CreateProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, draft: NewProduct) -> CatalogResult<Product> {
        // Unique-name pre-check (exact, case-sensitive)
        if self.product_repo.exists_by_name(&draft.name).await? {
            return Err(CatalogError::ProductNameTaken(draft.name));
        }

        let product = Product::create(draft);

        // A concurrent create racing on the same name can pass the
        // pre-check; the unique index arbitrates and we surface the
        // same Conflict.
        if let Err(e) = self.product_repo.insert(&product).await {
            return Err(match e {
                CatalogError::Database(db) if is_unique_violation(&db) => {
                    CatalogError::ProductNameTaken(product.name)
                }
                other => other,
            });
        }

        tracing::info!(
            product_id = %product.product_id,
            name = %product.name,
            "Product created"
        );

        Ok(product)
    }
}
