//! Remove Category Use Case
//!
//! Soft delete: Active -> Inactive. Products keep their foreign key;
//! they render as uncategorized, nothing cascades.

use std::sync::Arc;

use kernel::id::CategoryId;

use crate::domain::repository::CategoryRepository;
use crate::error::{CatalogError, CatalogResult};

/// Remove category use case
pub struct RemoveCategoryUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> RemoveCategoryUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self, id: CategoryId) -> CatalogResult<()> {
        let mut category = self
            .category_repo
            .find_active_by_id(&id)
            .await?
            .ok_or_else(|| CatalogError::CategoryNotFound(id.into_uuid()))?;

        category.deactivate();
        self.category_repo.update(&category).await?;

        tracing::info!(
            category_id = %category.category_id,
            "Category soft-deleted"
        );

        Ok(())
    }
}
