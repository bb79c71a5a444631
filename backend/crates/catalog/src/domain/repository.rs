//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure
//! layer. Lookup methods come in two flavors: `find_by_id` resolves a
//! row regardless of its active flag (the update/reactivation path),
//! `find_active_by_id` only sees visible rows (the lookup path).

use kernel::id::{CategoryId, ProductId};

use crate::domain::entity::category::Category;
use crate::domain::entity::product::Product;
use crate::domain::listing::{PageSpec, ProductFilter, SortSpec};
use crate::error::CatalogResult;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// Persist a new product
    async fn insert(&self, product: &Product) -> CatalogResult<()>;

    /// Find by id regardless of active state
    async fn find_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>>;

    /// Find a visible (active) product by id
    async fn find_active_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>>;

    /// Check if a product name is taken (exact, case-sensitive)
    async fn exists_by_name(&self, name: &str) -> CatalogResult<bool>;

    /// Persist changes to an existing product
    async fn update(&self, product: &Product) -> CatalogResult<()>;

    /// Apply filters, sort, and pagination over the active set.
    /// Returns the page rows plus the post-filter pre-pagination total.
    async fn search(
        &self,
        filter: &ProductFilter,
        sort: SortSpec,
        page: PageSpec,
    ) -> CatalogResult<(Vec<Product>, u64)>;

    /// Simple substring search over name/description of active products
    async fn search_text(&self, term: &str) -> CatalogResult<Vec<Product>>;

    /// Active products referencing the given category
    async fn find_by_category(&self, category_id: &CategoryId) -> CatalogResult<Vec<Product>>;
}

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// Persist a new category
    async fn insert(&self, category: &Category) -> CatalogResult<()>;

    /// Find by id regardless of active state
    async fn find_by_id(&self, id: &CategoryId) -> CatalogResult<Option<Category>>;

    /// Find a visible (active) category by id
    async fn find_active_by_id(&self, id: &CategoryId) -> CatalogResult<Option<Category>>;

    /// Check if a category name is taken (exact, case-sensitive)
    async fn exists_by_name(&self, name: &str) -> CatalogResult<bool>;

    /// Persist changes to an existing category
    async fn update(&self, category: &Category) -> CatalogResult<()>;

    /// All active categories ordered by name ascending
    async fn list_active(&self) -> CatalogResult<Vec<Category>>;
}
