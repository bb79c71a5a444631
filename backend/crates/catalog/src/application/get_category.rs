//! Get Category Use Case
//!
//! Single-item lookup including the category's active products
//! (read-only back-reference).

use std::sync::Arc;

use kernel::id::CategoryId;

use crate::domain::entity::category::Category;
use crate::domain::entity::product::Product;
use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::error::{CatalogError, CatalogResult};

/// Category plus its owned products
pub struct CategoryDetail {
    pub category: Category,
    pub products: Vec<Product>,
}

/// Get category use case
pub struct GetCategoryUseCase<C, P>
where
    C: CategoryRepository,
    P: ProductRepository,
{
    category_repo: Arc<C>,
    product_repo: Arc<P>,
}

impl<C, P> GetCategoryUseCase<C, P>
where
    C: CategoryRepository,
    P: ProductRepository,
{
    pub fn new(category_repo: Arc<C>, product_repo: Arc<P>) -> Self {
        Self {
            category_repo,
            product_repo,
        }
    }

    pub async fn execute(&self, id: CategoryId) -> CatalogResult<CategoryDetail> {
        let category = self
            .category_repo
            .find_active_by_id(&id)
            .await?
            .ok_or_else(|| CatalogError::CategoryNotFound(id.into_uuid()))?;

        let products = self.product_repo.find_by_category(&id).await?;

        Ok(CategoryDetail { category, products })
    }
}
