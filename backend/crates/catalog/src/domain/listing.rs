//! Listing Engine
//!
//! Filter composition, sort order, and pagination over a resource
//! collection. Filters form a closed predicate set (never raw SQL
//! fragments), sort columns come from a static allow-list, and
//! pagination parameters are rejected when out of bounds, never
//! silently clamped.

use kernel::id::CategoryId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Default page number when the parameter is absent
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size when the parameter is absent
pub const DEFAULT_LIMIT: u32 = 10;
/// Upper bound on page size
pub const MAX_LIMIT: u32 = 100;

// ============================================================================
// Filters
// ============================================================================

/// Conjunctive product filters; every predicate is optional
///
/// `is_active = true` is applied implicitly by every repository query
/// and is not representable here.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring match over name OR description
    pub search: Option<String>,
    /// Exact match against the category foreign key
    pub category: Option<CategoryId>,
    /// Inclusive lower price bound
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound
    pub max_price: Option<Decimal>,
}

// ============================================================================
// Sorting
// ============================================================================

/// Allow-list of sortable product columns
///
/// Client input is parsed into this enum; SQL ORDER BY only ever sees
/// the static column names below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Name,
    Price,
    Stock,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Parse an API field name; unknown names are a validation error
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "stock" => Some(Self::Stock),
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    /// Column name for ORDER BY
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Stock => "stock",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    /// API names accepted by [`SortField::parse`], for error messages
    pub const ALLOWED: &'static [&'static str] =
        &["name", "price", "stock", "createdAt", "updatedAt"];
}

/// Sort direction, normalized case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Parse an API direction token ("asc" / "desc", any case)
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    /// SQL keyword for ORDER BY
    pub const fn sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Combined sort specification; defaults to newest-first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

// ============================================================================
// Pagination
// ============================================================================

/// Pagination parameter violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageSpecError {
    #[error("page must be at least 1")]
    PageOutOfRange,

    #[error("limit must be between 1 and {MAX_LIMIT}")]
    LimitOutOfRange,
}

/// Validated 1-indexed page request
///
/// Out-of-bounds input is rejected by the constructor; defaults apply
/// only when a parameter is entirely absent (see the boundary DTOs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    page: u32,
    limit: u32,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageSpec {
    /// Validate page >= 1 and 1 <= limit <= MAX_LIMIT
    pub fn new(page: u32, limit: u32) -> Result<Self, PageSpecError> {
        if page < 1 {
            return Err(PageSpecError::PageOutOfRange);
        }
        if limit < 1 || limit > MAX_LIMIT {
            return Err(PageSpecError::LimitOutOfRange);
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Offset = (page - 1) * limit
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }
}

/// Aggregate counts describing a page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// Row count over the filtered set, pre-pagination
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    /// ceil(total / limit); 0 when the filtered set is empty
    pub total_pages: u64,
}

impl PageMeta {
    pub fn new(total: u64, page: &PageSpec) -> Self {
        Self {
            total,
            page: page.page,
            limit: page.limit,
            total_pages: total.div_ceil(page.limit as u64),
        }
    }
}

/// A page of results plus its pagination envelope
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64, page: &PageSpec) -> Self {
        Self {
            data,
            meta: PageMeta::new(total, page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_spec_defaults() {
        let page = PageSpec::default();
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_page_spec_bounds() {
        assert!(PageSpec::new(1, 1).is_ok());
        assert!(PageSpec::new(1, 100).is_ok());
        assert_eq!(
            PageSpec::new(0, 10),
            Err(PageSpecError::PageOutOfRange)
        );
        assert_eq!(
            PageSpec::new(1, 0),
            Err(PageSpecError::LimitOutOfRange)
        );
        assert_eq!(
            PageSpec::new(1, 101),
            Err(PageSpecError::LimitOutOfRange)
        );
    }

    #[test]
    fn test_offset_arithmetic() {
        let page = PageSpec::new(3, 25).unwrap();
        assert_eq!(page.offset(), 50);

        let page = PageSpec::new(1, 100).unwrap();
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let page = PageSpec::new(1, 10).unwrap();
        assert_eq!(PageMeta::new(0, &page).total_pages, 0);
        assert_eq!(PageMeta::new(1, &page).total_pages, 1);
        assert_eq!(PageMeta::new(10, &page).total_pages, 1);
        assert_eq!(PageMeta::new(11, &page).total_pages, 2);
        assert_eq!(PageMeta::new(95, &page).total_pages, 10);
    }

    #[test]
    fn test_sort_field_allow_list() {
        assert_eq!(SortField::parse("price"), Some(SortField::Price));
        assert_eq!(SortField::parse("createdAt"), Some(SortField::CreatedAt));
        // Raw column names and arbitrary identifiers are rejected
        assert_eq!(SortField::parse("created_at"), None);
        assert_eq!(SortField::parse("password_hash"), None);
        assert_eq!(SortField::parse("name; DROP TABLE products"), None);
    }

    #[test]
    fn test_sort_direction_case_insensitive() {
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("ASC"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("Desc"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("sideways"), None);
    }

    #[test]
    fn test_sort_spec_default_is_newest_first() {
        let sort = SortSpec::default();
        assert_eq!(sort.field, SortField::CreatedAt);
        assert_eq!(sort.direction, SortDirection::Desc);
    }
}
