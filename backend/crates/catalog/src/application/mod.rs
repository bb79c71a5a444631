//! Application Layer
//!
//! One use case per catalog operation.

pub mod create_category;
pub mod create_product;
pub mod get_category;
pub mod get_product;
pub mod list_categories;
pub mod list_products;
pub mod remove_category;
pub mod remove_product;
pub mod search_products;
pub mod update_category;
pub mod update_product;

// Re-exports
pub use create_category::CreateCategoryUseCase;
pub use create_product::CreateProductUseCase;
pub use get_category::{CategoryDetail, GetCategoryUseCase};
pub use get_product::GetProductUseCase;
pub use list_categories::ListCategoriesUseCase;
pub use list_products::ListProductsUseCase;
pub use remove_category::RemoveCategoryUseCase;
pub use remove_product::RemoveProductUseCase;
pub use search_products::SearchProductsUseCase;
pub use update_category::UpdateCategoryUseCase;
pub use update_product::UpdateProductUseCase;
