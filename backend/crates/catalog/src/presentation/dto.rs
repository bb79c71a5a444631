//! API DTOs (Data Transfer Objects)
//!
//! Every request shape carries an explicit `validate()` that either
//! yields boundary-validated domain input or the full list of
//! violations. Out-of-bounds values are rejected, never clamped;
//! defaults apply only to absent parameters.

use chrono::{DateTime, Utc};
use kernel::id::CategoryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::category::{Category, CategoryPatch, NewCategory};
use crate::domain::entity::product::{NewProduct, Product, ProductPatch};
use crate::domain::listing::{
    DEFAULT_LIMIT, DEFAULT_PAGE, Page, PageMeta, PageSpec, ProductFilter, SortDirection,
    SortField, SortSpec,
};

// ============================================================================
// Product requests
// ============================================================================

/// Create product request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub stock: Option<i32>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CreateProductRequest {
    pub fn validate(self) -> Result<NewProduct, Vec<String>> {
        let mut errors = Vec::new();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.push("name: must not be empty".to_string());
        }

        if self.price.is_sign_negative() {
            errors.push("price: must not be negative".to_string());
        }

        let stock = self.stock.unwrap_or(0);
        if stock < 0 {
            errors.push("stock: must not be negative".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewProduct {
            name,
            description: self.description,
            price: self.price,
            stock,
            category_id: self.category_id.map(CategoryId::from_uuid),
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

/// Partial product update request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub stock: Option<i32>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateProductRequest {
    pub fn validate(self) -> Result<ProductPatch, Vec<String>> {
        let mut errors = Vec::new();

        let name = match self.name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    errors.push("name: must not be empty".to_string());
                }
                Some(name)
            }
            None => None,
        };

        if let Some(price) = self.price {
            if price.is_sign_negative() {
                errors.push("price: must not be negative".to_string());
            }
        }

        if let Some(stock) = self.stock {
            if stock < 0 {
                errors.push("stock: must not be negative".to_string());
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductPatch {
            name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category_id: self.category_id.map(CategoryId::from_uuid),
            is_active: self.is_active,
        })
    }
}

// ============================================================================
// Product listing query
// ============================================================================

/// Raw query parameters for GET /products
///
/// Everything arrives as text; `validate()` parses each parameter
/// explicitly so malformed input fails with a message instead of
/// being coerced.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub min_price: Option<String>,
    #[serde(default)]
    pub max_price: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl ListProductsQuery {
    pub fn validate(self) -> Result<(ProductFilter, SortSpec, PageSpec), Vec<String>> {
        let mut errors = Vec::new();

        let page = match self.page.as_deref() {
            None => DEFAULT_PAGE,
            Some(raw) => match raw.parse::<u32>() {
                Ok(value) => value,
                Err(_) => {
                    errors.push("page: must be a positive integer".to_string());
                    DEFAULT_PAGE
                }
            },
        };

        let limit = match self.limit.as_deref() {
            None => DEFAULT_LIMIT,
            Some(raw) => match raw.parse::<u32>() {
                Ok(value) => value,
                Err(_) => {
                    errors.push("limit: must be a positive integer".to_string());
                    DEFAULT_LIMIT
                }
            },
        };

        let page_spec = match PageSpec::new(page, limit) {
            Ok(spec) => spec,
            Err(e) => {
                errors.push(e.to_string());
                PageSpec::default()
            }
        };

        let category = match self.category.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<Uuid>() {
                Ok(id) => Some(CategoryId::from_uuid(id)),
                Err(_) => {
                    errors.push("category: must be a UUID".to_string());
                    None
                }
            },
        };

        let min_price = match self.min_price.as_deref() {
            None => None,
            Some(raw) => match parse_price(raw) {
                Ok(price) => Some(price),
                Err(msg) => {
                    errors.push(format!("minPrice: {msg}"));
                    None
                }
            },
        };

        let max_price = match self.max_price.as_deref() {
            None => None,
            Some(raw) => match parse_price(raw) {
                Ok(price) => Some(price),
                Err(msg) => {
                    errors.push(format!("maxPrice: {msg}"));
                    None
                }
            },
        };

        let field = match self.sort_by.as_deref() {
            None => SortField::default(),
            Some(raw) => match SortField::parse(raw) {
                Some(field) => field,
                None => {
                    errors.push(format!(
                        "sortBy: must be one of {}",
                        SortField::ALLOWED.join(", ")
                    ));
                    SortField::default()
                }
            },
        };

        let direction = match self.order.as_deref() {
            None => SortDirection::default(),
            Some(raw) => match SortDirection::parse(raw) {
                Some(direction) => direction,
                None => {
                    errors.push("order: must be ASC or DESC".to_string());
                    SortDirection::default()
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok((
            ProductFilter {
                search: self.search,
                category,
                min_price,
                max_price,
            },
            SortSpec { field, direction },
            page_spec,
        ))
    }
}

fn parse_price(raw: &str) -> Result<Decimal, &'static str> {
    let price: Decimal = raw.parse().map_err(|_| "must be a number")?;
    if price.is_sign_negative() {
        return Err("must not be negative");
    }
    Ok(price)
}

/// Query for GET /products/search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchProductsQuery {
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchProductsQuery {
    pub fn validate(self) -> Result<String, Vec<String>> {
        match self.q {
            Some(q) if !q.trim().is_empty() => Ok(q),
            _ => Err(vec!["q: must not be empty".to_string()]),
        }
    }
}

// ============================================================================
// Category requests
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CreateCategoryRequest {
    pub fn validate(self) -> Result<NewCategory, Vec<String>> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(vec!["name: must not be empty".to_string()]);
        }

        Ok(NewCategory {
            name,
            description: self.description,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

/// Partial category update request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateCategoryRequest {
    pub fn validate(self) -> Result<CategoryPatch, Vec<String>> {
        let name = match self.name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(vec!["name: must not be empty".to_string()]);
                }
                Some(name)
            }
            None => None,
        };

        Ok(CategoryPatch {
            name,
            description: self.description,
            is_active: self.is_active,
        })
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Product representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.product_id.into_uuid(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock: product.stock,
            category_id: product.category_id.map(|id| id.into_uuid()),
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Category representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.category_id.into_uuid(),
            name: category.name.clone(),
            description: category.description.clone(),
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Category plus its active products (single-item lookup)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetailResponse {
    #[serde(flatten)]
    pub category: CategoryResponse,
    pub products: Vec<ProductResponse>,
}

/// Pagination metadata in the listing envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetaResponse {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

impl From<&PageMeta> for PageMetaResponse {
    fn from(meta: &PageMeta) -> Self {
        Self {
            total: meta.total,
            page: meta.page,
            limit: meta.limit,
            total_pages: meta.total_pages,
        }
    }
}

/// Paginated product listing
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub data: Vec<ProductResponse>,
    pub meta: PageMetaResponse,
}

impl From<&Page<Product>> for ProductListResponse {
    fn from(page: &Page<Product>) -> Self {
        Self {
            data: page.data.iter().map(ProductResponse::from).collect(),
            meta: PageMetaResponse::from(&page.meta),
        }
    }
}
