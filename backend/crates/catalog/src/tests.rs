//! Unit tests for the catalog crate
//!
//! Use-case tests run against an in-memory repository so lifecycle and
//! listing semantics are pinned down without a database.

use std::sync::{Arc, Mutex};

use kernel::id::{CategoryId, ProductId};

use crate::application::{
    CreateCategoryUseCase, CreateProductUseCase, GetCategoryUseCase, GetProductUseCase,
    ListCategoriesUseCase, ListProductsUseCase, RemoveCategoryUseCase, RemoveProductUseCase,
    SearchProductsUseCase, UpdateCategoryUseCase, UpdateProductUseCase,
};
use crate::domain::entity::category::{Category, NewCategory};
use crate::domain::entity::product::{NewProduct, Product, ProductPatch};
use crate::domain::listing::{
    PageSpec, ProductFilter, SortDirection, SortField, SortSpec,
};
use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::error::{CatalogError, CatalogResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemoryCatalog {
    products: Arc<Mutex<Vec<Product>>>,
    categories: Arc<Mutex<Vec<Category>>>,
}

impl MemoryCatalog {
    fn new() -> Self {
        Self::default()
    }
}

fn matches_filter(product: &Product, filter: &ProductFilter) -> bool {
    if let Some(term) = &filter.search {
        let term = term.to_lowercase();
        let in_name = product.name.to_lowercase().contains(&term);
        let in_description = product
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(&term));
        if !in_name && !in_description {
            return false;
        }
    }
    if let Some(category) = &filter.category {
        if product.category_id.as_ref() != Some(category) {
            return false;
        }
    }
    if let Some(min) = filter.min_price {
        if product.price < min {
            return false;
        }
    }
    if let Some(max) = filter.max_price {
        if product.price > max {
            return false;
        }
    }
    true
}

impl ProductRepository for MemoryCatalog {
    async fn insert(&self, product: &Product) -> CatalogResult<()> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.product_id == *id)
            .cloned())
    }

    async fn find_active_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.product_id == *id && p.is_active)
            .cloned())
    }

    async fn exists_by_name(&self, name: &str) -> CatalogResult<bool> {
        Ok(self.products.lock().unwrap().iter().any(|p| p.name == name))
    }

    async fn update(&self, product: &Product) -> CatalogResult<()> {
        let mut products = self.products.lock().unwrap();
        let slot = products
            .iter_mut()
            .find(|p| p.product_id == product.product_id)
            .ok_or_else(|| CatalogError::Internal("update of unknown product".into()))?;
        *slot = product.clone();
        Ok(())
    }

    async fn search(
        &self,
        filter: &ProductFilter,
        sort: SortSpec,
        page: PageSpec,
    ) -> CatalogResult<(Vec<Product>, u64)> {
        let mut rows: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active && matches_filter(p, filter))
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            let ordering = match sort.field {
                SortField::Name => a.name.cmp(&b.name),
                SortField::Price => a.price.cmp(&b.price),
                SortField::Stock => a.stock.cmp(&b.stock),
                SortField::CreatedAt => a.created_at.cmp(&b.created_at),
                SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            };
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = rows.len() as u64;
        let rows = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok((rows, total))
    }

    async fn search_text(&self, term: &str) -> CatalogResult<Vec<Product>> {
        let filter = ProductFilter {
            search: Some(term.to_string()),
            ..Default::default()
        };
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active && matches_filter(p, &filter))
            .cloned()
            .collect())
    }

    async fn find_by_category(&self, category_id: &CategoryId) -> CatalogResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active && p.category_id.as_ref() == Some(category_id))
            .cloned()
            .collect())
    }
}

impl CategoryRepository for MemoryCatalog {
    async fn insert(&self, category: &Category) -> CatalogResult<()> {
        self.categories.lock().unwrap().push(category.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &CategoryId) -> CatalogResult<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.category_id == *id)
            .cloned())
    }

    async fn find_active_by_id(&self, id: &CategoryId) -> CatalogResult<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.category_id == *id && c.is_active)
            .cloned())
    }

    async fn exists_by_name(&self, name: &str) -> CatalogResult<bool> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.name == name))
    }

    async fn update(&self, category: &Category) -> CatalogResult<()> {
        let mut categories = self.categories.lock().unwrap();
        let slot = categories
            .iter_mut()
            .find(|c| c.category_id == category.category_id)
            .ok_or_else(|| CatalogError::Internal("update of unknown category".into()))?;
        *slot = category.clone();
        Ok(())
    }

    async fn list_active(&self) -> CatalogResult<Vec<Category>> {
        let mut rows: Vec<Category> = self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn product_draft(name: &str, price: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: None,
        price: price.parse().unwrap(),
        stock: 0,
        category_id: None,
        is_active: true,
    }
}

fn category_draft(name: &str) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        description: None,
        is_active: true,
    }
}

async fn seed_product(repo: &Arc<MemoryCatalog>, draft: NewProduct) -> Product {
    CreateProductUseCase::new(repo.clone())
        .execute(draft)
        .await
        .unwrap()
}

// ============================================================================
// Mutation lifecycle
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_product_name_conflicts() {
        let repo = Arc::new(MemoryCatalog::new());
        seed_product(&repo, product_draft("Atlas", "10")).await;

        let second = CreateProductUseCase::new(repo.clone())
            .execute(product_draft("Atlas", "12"))
            .await;
        assert!(matches!(second, Err(CatalogError::ProductNameTaken(_))));
    }

    #[tokio::test]
    async fn test_duplicate_category_name_conflicts() {
        let repo = Arc::new(MemoryCatalog::new());
        CreateCategoryUseCase::new(repo.clone())
            .execute(category_draft("Books"))
            .await
            .unwrap();

        let second = CreateCategoryUseCase::new(repo.clone())
            .execute(category_draft("Books"))
            .await;
        assert!(matches!(second, Err(CatalogError::CategoryNameTaken(_))));
    }

    #[tokio::test]
    async fn test_soft_delete_hides_from_lookup() {
        let repo = Arc::new(MemoryCatalog::new());
        let product = seed_product(&repo, product_draft("Atlas", "10")).await;

        RemoveProductUseCase::new(repo.clone())
            .execute(product.product_id)
            .await
            .unwrap();

        let lookup = GetProductUseCase::new(repo.clone())
            .execute(product.product_id)
            .await;
        assert!(matches!(lookup, Err(CatalogError::ProductNotFound(_))));
    }

    #[tokio::test]
    async fn test_soft_delete_hides_from_listing() {
        let repo = Arc::new(MemoryCatalog::new());
        let kept = seed_product(&repo, product_draft("Kept", "5")).await;
        let removed = seed_product(&repo, product_draft("Removed", "5")).await;

        RemoveProductUseCase::new(repo.clone())
            .execute(removed.product_id)
            .await
            .unwrap();

        let page = ListProductsUseCase::new(repo.clone())
            .execute(
                ProductFilter::default(),
                SortSpec::default(),
                PageSpec::default(),
            )
            .await
            .unwrap();

        assert!(page.data.iter().all(|p| p.is_active));
        assert!(page.data.iter().any(|p| p.product_id == kept.product_id));
        assert!(!page.data.iter().any(|p| p.product_id == removed.product_id));
        assert_eq!(page.meta.total, 1);
    }

    #[tokio::test]
    async fn test_second_soft_delete_reports_not_found() {
        let repo = Arc::new(MemoryCatalog::new());
        let product = seed_product(&repo, product_draft("Atlas", "10")).await;

        let remover = RemoveProductUseCase::new(repo.clone());
        remover.execute(product.product_id).await.unwrap();

        // The row is now invisible; a repeat delete behaves like a miss
        let second = remover.execute(product.product_id).await;
        assert!(matches!(second, Err(CatalogError::ProductNotFound(_))));
    }

    #[tokio::test]
    async fn test_remove_unknown_product_reports_not_found() {
        let repo = Arc::new(MemoryCatalog::new());
        let result = RemoveProductUseCase::new(repo.clone())
            .execute(ProductId::new())
            .await;
        assert!(matches!(result, Err(CatalogError::ProductNotFound(_))));
    }

    #[tokio::test]
    async fn test_patch_merges_only_supplied_fields() {
        let repo = Arc::new(MemoryCatalog::new());
        let product = seed_product(
            &repo,
            NewProduct {
                description: Some("World atlas".to_string()),
                ..product_draft("Atlas", "10")
            },
        )
        .await;

        let updated = UpdateProductUseCase::new(repo.clone())
            .execute(
                product.product_id,
                ProductPatch {
                    stock: Some(5),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.stock, 5);
        assert_eq!(updated.name, product.name);
        assert_eq!(updated.price, product.price);
        assert_eq!(updated.description, product.description);
        assert_eq!(updated.category_id, product.category_id);
    }

    #[tokio::test]
    async fn test_update_unknown_id_reports_not_found() {
        let repo = Arc::new(MemoryCatalog::new());
        let result = UpdateProductUseCase::new(repo.clone())
            .execute(ProductId::new(), ProductPatch::default())
            .await;
        assert!(matches!(result, Err(CatalogError::ProductNotFound(_))));
    }

    #[tokio::test]
    async fn test_update_reactivates_soft_deleted_row() {
        let repo = Arc::new(MemoryCatalog::new());
        let product = seed_product(&repo, product_draft("Atlas", "10")).await;

        RemoveProductUseCase::new(repo.clone())
            .execute(product.product_id)
            .await
            .unwrap();

        // Updates resolve by id regardless of the flag
        UpdateProductUseCase::new(repo.clone())
            .execute(
                product.product_id,
                ProductPatch {
                    is_active: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(
            GetProductUseCase::new(repo.clone())
                .execute(product.product_id)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_category_soft_delete_keeps_product_fk() {
        let repo = Arc::new(MemoryCatalog::new());
        let category = CreateCategoryUseCase::new(repo.clone())
            .execute(category_draft("Books"))
            .await
            .unwrap();
        let product = seed_product(
            &repo,
            NewProduct {
                category_id: Some(category.category_id),
                ..product_draft("Atlas", "10")
            },
        )
        .await;

        RemoveCategoryUseCase::new(repo.clone())
            .execute(category.category_id)
            .await
            .unwrap();

        // The product stays visible and keeps its reference
        let found = GetProductUseCase::new(repo.clone())
            .execute(product.product_id)
            .await
            .unwrap();
        assert_eq!(found.category_id, Some(category.category_id));
    }

    #[tokio::test]
    async fn test_category_update_partial_merge() {
        let repo = Arc::new(MemoryCatalog::new());
        let category = CreateCategoryUseCase::new(repo.clone())
            .execute(NewCategory {
                description: Some("Paper things".to_string()),
                ..category_draft("Books")
            })
            .await
            .unwrap();

        let updated = UpdateCategoryUseCase::new(repo.clone())
            .execute(
                category.category_id,
                crate::domain::entity::category::CategoryPatch {
                    description: Some("Printed things".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Books");
        assert_eq!(updated.description.as_deref(), Some("Printed things"));
    }
}

// ============================================================================
// Listing engine
// ============================================================================

mod listing_tests {
    use super::*;

    #[tokio::test]
    async fn test_category_and_price_filter_scenario() {
        let repo = Arc::new(MemoryCatalog::new());
        let books = CreateCategoryUseCase::new(repo.clone())
            .execute(category_draft("Books"))
            .await
            .unwrap();

        seed_product(
            &repo,
            NewProduct {
                category_id: Some(books.category_id),
                ..product_draft("Atlas", "10")
            },
        )
        .await;
        // Same category, outside the price range
        seed_product(
            &repo,
            NewProduct {
                category_id: Some(books.category_id),
                ..product_draft("Encyclopedia", "99")
            },
        )
        .await;
        // In range, different category
        seed_product(&repo, product_draft("Mug", "10")).await;

        let page = ListProductsUseCase::new(repo.clone())
            .execute(
                ProductFilter {
                    category: Some(books.category_id),
                    min_price: Some("5".parse().unwrap()),
                    max_price: Some("20".parse().unwrap()),
                    ..Default::default()
                },
                SortSpec::default(),
                PageSpec::default(),
            )
            .await
            .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name, "Atlas");
        assert_eq!(page.meta.total, 1);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[tokio::test]
    async fn test_search_matches_name_or_description_case_insensitively() {
        let repo = Arc::new(MemoryCatalog::new());
        seed_product(
            &repo,
            NewProduct {
                description: Some("Ergonomic WIRELESS mouse".to_string()),
                ..product_draft("Mouse", "20")
            },
        )
        .await;
        seed_product(&repo, product_draft("Keyboard", "30")).await;

        let page = ListProductsUseCase::new(repo.clone())
            .execute(
                ProductFilter {
                    search: Some("wireless".to_string()),
                    ..Default::default()
                },
                SortSpec::default(),
                PageSpec::default(),
            )
            .await
            .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name, "Mouse");
    }

    #[tokio::test]
    async fn test_single_price_bound_applies_alone() {
        let repo = Arc::new(MemoryCatalog::new());
        seed_product(&repo, product_draft("Cheap", "5")).await;
        seed_product(&repo, product_draft("Pricey", "50")).await;

        let lister = ListProductsUseCase::new(repo.clone());

        let page = lister
            .execute(
                ProductFilter {
                    min_price: Some("10".parse().unwrap()),
                    ..Default::default()
                },
                SortSpec::default(),
                PageSpec::default(),
            )
            .await
            .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name, "Pricey");

        let page = lister
            .execute(
                ProductFilter {
                    max_price: Some("10".parse().unwrap()),
                    ..Default::default()
                },
                SortSpec::default(),
                PageSpec::default(),
            )
            .await
            .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name, "Cheap");
    }

    #[tokio::test]
    async fn test_price_bounds_are_inclusive() {
        let repo = Arc::new(MemoryCatalog::new());
        seed_product(&repo, product_draft("Atlas", "10")).await;

        let page = ListProductsUseCase::new(repo.clone())
            .execute(
                ProductFilter {
                    min_price: Some("10".parse().unwrap()),
                    max_price: Some("10".parse().unwrap()),
                    ..Default::default()
                },
                SortSpec::default(),
                PageSpec::default(),
            )
            .await
            .unwrap();
        assert_eq!(page.data.len(), 1);
    }

    #[tokio::test]
    async fn test_pagination_respects_limit_and_counts_everything() {
        let repo = Arc::new(MemoryCatalog::new());
        for i in 0..25 {
            seed_product(&repo, product_draft(&format!("Item {i:02}"), "10")).await;
        }

        let lister = ListProductsUseCase::new(repo.clone());
        let page = lister
            .execute(
                ProductFilter::default(),
                SortSpec {
                    field: SortField::Name,
                    direction: SortDirection::Asc,
                },
                PageSpec::new(3, 10).unwrap(),
            )
            .await
            .unwrap();

        // Last page carries the remainder; totals cover the filtered set
        assert_eq!(page.data.len(), 5);
        assert!(page.data.len() <= page.meta.limit as usize);
        assert_eq!(page.meta.total, 25);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.data[0].name, "Item 20");
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty_not_an_error() {
        let repo = Arc::new(MemoryCatalog::new());
        seed_product(&repo, product_draft("Atlas", "10")).await;

        let page = ListProductsUseCase::new(repo.clone())
            .execute(
                ProductFilter::default(),
                SortSpec::default(),
                PageSpec::new(5, 10).unwrap(),
            )
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 1);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[tokio::test]
    async fn test_sort_by_price_descending() {
        let repo = Arc::new(MemoryCatalog::new());
        seed_product(&repo, product_draft("Mid", "20")).await;
        seed_product(&repo, product_draft("High", "30")).await;
        seed_product(&repo, product_draft("Low", "10")).await;

        let page = ListProductsUseCase::new(repo.clone())
            .execute(
                ProductFilter::default(),
                SortSpec {
                    field: SortField::Price,
                    direction: SortDirection::Desc,
                },
                PageSpec::default(),
            )
            .await
            .unwrap();

        let names: Vec<&str> = page.data.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["High", "Mid", "Low"]);
    }

    #[tokio::test]
    async fn test_category_mode_lists_active_sorted_by_name() {
        let repo = Arc::new(MemoryCatalog::new());
        let creator = CreateCategoryUseCase::new(repo.clone());
        creator.execute(category_draft("Sports")).await.unwrap();
        let books = creator.execute(category_draft("Books")).await.unwrap();
        creator.execute(category_draft("Clothing")).await.unwrap();

        RemoveCategoryUseCase::new(repo.clone())
            .execute(books.category_id)
            .await
            .unwrap();

        let categories = ListCategoriesUseCase::new(repo.clone())
            .execute()
            .await
            .unwrap();

        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Clothing", "Sports"]);
    }

    #[tokio::test]
    async fn test_get_category_includes_its_products() {
        let repo = Arc::new(MemoryCatalog::new());
        let books = CreateCategoryUseCase::new(repo.clone())
            .execute(category_draft("Books"))
            .await
            .unwrap();
        seed_product(
            &repo,
            NewProduct {
                category_id: Some(books.category_id),
                ..product_draft("Atlas", "10")
            },
        )
        .await;
        seed_product(&repo, product_draft("Mug", "5")).await;

        let detail = GetCategoryUseCase::new(repo.clone(), repo.clone())
            .execute(books.category_id)
            .await
            .unwrap();

        assert_eq!(detail.category.name, "Books");
        assert_eq!(detail.products.len(), 1);
        assert_eq!(detail.products[0].name, "Atlas");
    }

    #[tokio::test]
    async fn test_search_endpoint_returns_bare_matches() {
        let repo = Arc::new(MemoryCatalog::new());
        seed_product(&repo, product_draft("Atlas of Birds", "10")).await;
        let hidden = seed_product(&repo, product_draft("Atlas of Fish", "10")).await;
        RemoveProductUseCase::new(repo.clone())
            .execute(hidden.product_id)
            .await
            .unwrap();

        let results = SearchProductsUseCase::new(repo.clone())
            .execute("atlas")
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Atlas of Birds");
    }

    #[tokio::test]
    async fn test_round_trip_preserves_submitted_fields() {
        let repo = Arc::new(MemoryCatalog::new());
        let draft = NewProduct {
            name: "Atlas".to_string(),
            description: Some("World atlas".to_string()),
            price: "10.50".parse().unwrap(),
            stock: 7,
            category_id: None,
            is_active: true,
        };
        let created = seed_product(&repo, draft.clone()).await;

        let fetched = GetProductUseCase::new(repo.clone())
            .execute(created.product_id)
            .await
            .unwrap();

        assert_eq!(fetched.name, draft.name);
        assert_eq!(fetched.description, draft.description);
        assert_eq!(fetched.price, draft.price);
        assert_eq!(fetched.stock, draft.stock);
        assert_eq!(fetched.category_id, draft.category_id);
    }
}
