//! List Categories Use Case
//!
//! Category-mode listing: the full active set ordered by name
//! ascending, no pagination envelope.

use std::sync::Arc;

use crate::domain::entity::category::Category;
use crate::domain::repository::CategoryRepository;
use crate::error::CatalogResult;

/// List categories use case
pub struct ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self) -> CatalogResult<Vec<Category>> {
        self.category_repo.list_active().await
    }
}
