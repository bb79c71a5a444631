//! Product Entity
//!
//! Sellable item with an optional category reference. The product owns
//! the foreign key; deactivating a category never touches its products.

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, ProductId};
use rust_decimal::Decimal;

/// Boundary-validated input for creating a product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub category_id: Option<CategoryId>,
    pub is_active: bool,
}

/// Partial update: absent fields keep their prior values
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub category_id: Option<CategoryId>,
    pub is_active: Option<bool>,
}

/// Product entity
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: ProductId,
    /// Unique name (exact, case-sensitive)
    pub name: String,
    pub description: Option<String>,
    /// Non-negative, two decimal places persisted
    pub price: Decimal,
    /// Non-negative stock count
    pub stock: i32,
    /// Optional owning-side reference; a product may be uncategorized
    pub category_id: Option<CategoryId>,
    /// Visibility flag; `false` means soft-deleted
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product in the Active state
    pub fn create(draft: NewProduct) -> Self {
        let now = Utc::now();

        Self {
            product_id: ProductId::new(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
            category_id: draft.category_id,
            is_active: draft.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update; only supplied fields are overwritten
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = Some(category_id);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
    }

    /// Soft delete: Active -> Inactive
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}
