//! List Products Use Case
//!
//! Runs the listing engine: conjunctive filters, allow-listed sort,
//! validated pagination, and the page envelope with post-filter totals.

use std::sync::Arc;

use crate::domain::entity::product::Product;
use crate::domain::listing::{Page, PageSpec, ProductFilter, SortSpec};
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

/// List products use case
pub struct ListProductsUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> ListProductsUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(
        &self,
        filter: ProductFilter,
        sort: SortSpec,
        page: PageSpec,
    ) -> CatalogResult<Page<Product>> {
        let (rows, total) = self.product_repo.search(&filter, sort, page).await?;

        Ok(Page::new(rows, total, &page))
    }
}
