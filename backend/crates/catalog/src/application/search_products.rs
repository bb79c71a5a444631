//! Search Products Use Case
//!
//! Legacy search-bar endpoint: plain substring search over active
//! products, no pagination envelope.

use std::sync::Arc;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

/// Search products use case
pub struct SearchProductsUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> SearchProductsUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, term: &str) -> CatalogResult<Vec<Product>> {
        self.product_repo.search_text(term).await
    }
}
