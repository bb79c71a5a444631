//! Category Entity
//!
//! Catalog grouping. Holds a read-only back-reference to products; it
//! never owns their lifecycle.

use chrono::{DateTime, Utc};
use kernel::id::CategoryId;

/// Boundary-validated input for creating a category
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Partial update: absent fields keep their prior values
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Category entity
#[derive(Debug, Clone)]
pub struct Category {
    pub category_id: CategoryId,
    /// Unique name (exact, case-sensitive)
    pub name: String,
    pub description: Option<String>,
    /// Visibility flag; `false` means soft-deleted
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category in the Active state
    pub fn create(draft: NewCategory) -> Self {
        let now = Utc::now();

        Self {
            category_id: CategoryId::new(),
            name: draft.name,
            description: draft.description,
            is_active: draft.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update; only supplied fields are overwritten
    pub fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
    }

    /// Soft delete: Active -> Inactive. Product foreign keys are left
    /// untouched; their category simply stops resolving on reads.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewCategory {
        NewCategory {
            name: "Books".to_string(),
            description: Some("Physical and digital books".to_string()),
            is_active: true,
        }
    }

    #[test]
    fn test_create_is_active() {
        let category = Category::create(draft());
        assert!(category.is_active);
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut category = Category::create(draft());
        category.apply(CategoryPatch {
            description: Some("Updated".to_string()),
            ..Default::default()
        });
        assert_eq!(category.name, "Books");
        assert_eq!(category.description.as_deref(), Some("Updated"));
    }

    #[test]
    fn test_deactivate() {
        let mut category = Category::create(draft());
        category.deactivate();
        assert!(!category.is_active);
    }
}
