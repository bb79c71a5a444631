//! Create Category Use Case

use std::sync::Arc;

use crate::domain::entity::category::{Category, NewCategory};
use crate::domain::repository::CategoryRepository;
use crate::error::{CatalogError, CatalogResult, is_unique_violation};

/// Create category use case
pub struct CreateCategoryUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> CreateCategoryUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self, draft: NewCategory) -> CatalogResult<Category> {
        // Unique-name pre-check (exact, case-sensitive)
        if self.category_repo.exists_by_name(&draft.name).await? {
            return Err(CatalogError::CategoryNameTaken(draft.name));
        }

        let category = Category::create(draft);

        if let Err(e) = self.category_repo.insert(&category).await {
            return Err(match e {
                CatalogError::Database(db) if is_unique_violation(&db) => {
                    CatalogError::CategoryNameTaken(category.name)
                }
                other => other,
            });
        }

        tracing::info!(
            category_id = %category.category_id,
            name = %category.name,
            "Category created"
        );

        Ok(category)
    }
}
