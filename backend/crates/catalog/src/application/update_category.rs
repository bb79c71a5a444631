//! Update Category Use Case
//!
//! Partial merge resolved by id without re-checking the active flag;
//! a PATCH with `isActive: true` recovers a soft-deleted category.

use std::sync::Arc;

use kernel::id::CategoryId;

use crate::domain::entity::category::{Category, CategoryPatch};
use crate::domain::repository::CategoryRepository;
use crate::error::{CatalogError, CatalogResult, is_unique_violation};

/// Update category use case
pub struct UpdateCategoryUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> UpdateCategoryUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self, id: CategoryId, patch: CategoryPatch) -> CatalogResult<Category> {
        let mut category = self
            .category_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| CatalogError::CategoryNotFound(id.into_uuid()))?;

        category.apply(patch);

        if let Err(e) = self.category_repo.update(&category).await {
            return Err(match e {
                CatalogError::Database(db) if is_unique_violation(&db) => {
                    CatalogError::CategoryNameTaken(category.name)
                }
                other => other,
            });
        }

        tracing::info!(
            category_id = %category.category_id,
            "Category updated"
        );

        Ok(category)
    }
}
