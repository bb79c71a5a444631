//! PostgreSQL Repository Implementations
//!
//! Listing queries are composed with `sqlx::QueryBuilder` over the
//! closed predicate set from the listing engine. Sort columns are the
//! allow-list enum's static names; client strings never reach the SQL.

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, ProductId};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::entity::category::Category;
use crate::domain::entity::product::Product;
use crate::domain::listing::{PageSpec, ProductFilter, SortSpec};
use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::error::CatalogResult;

const PRODUCT_COLUMNS: &str =
    "product_id, name, description, price, stock, category_id, is_active, created_at, updated_at";

const CATEGORY_COLUMNS: &str =
    "category_id, name, description, is_active, created_at, updated_at";

/// PostgreSQL-backed catalog repository (products + categories)
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the filter predicates to a query that already carries
/// `WHERE is_active = TRUE`
fn push_product_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    if let Some(term) = &filter.search {
        let pattern = format!("%{}%", term);
        qb.push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(category) = &filter.category {
        qb.push(" AND category_id = ").push_bind(*category.as_uuid());
    }

    match (filter.min_price, filter.max_price) {
        (Some(min), Some(max)) => {
            qb.push(" AND price BETWEEN ")
                .push_bind(min)
                .push(" AND ")
                .push_bind(max);
        }
        (Some(min), None) => {
            qb.push(" AND price >= ").push_bind(min);
        }
        (None, Some(max)) => {
            qb.push(" AND price <= ").push_bind(max);
        }
        (None, None) => {}
    }
}

// ============================================================================
// Product Repository Implementation
// ============================================================================

impl ProductRepository for PgCatalogRepository {
    async fn insert(&self, product: &Product) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                name,
                description,
                price,
                stock,
                category_id,
                is_active,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category_id.as_ref().map(|id| *id.as_uuid()))
        .bind(product.is_active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn find_active_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1 AND is_active = TRUE"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn exists_by_name(&self, name: &str) -> CatalogResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, product: &Product) -> CatalogResult<()> {
        sqlx::query(
            r#"
            UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                stock = $5,
                category_id = $6,
                is_active = $7,
                updated_at = $8
            WHERE product_id = $1
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category_id.as_ref().map(|id| *id.as_uuid()))
        .bind(product.is_active)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn search(
        &self,
        filter: &ProductFilter,
        sort: SortSpec,
        page: PageSpec,
    ) -> CatalogResult<(Vec<Product>, u64)> {
        // Total over the filtered set, pre-pagination
        let mut count_qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM products WHERE is_active = TRUE");
        push_product_filters(&mut count_qb, filter);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE is_active = TRUE"
        ));
        push_product_filters(&mut qb, filter);
        qb.push(" ORDER BY ")
            .push(sort.field.column())
            .push(" ")
            .push(sort.direction.sql());
        qb.push(" LIMIT ")
            .push_bind(page.limit() as i64)
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows: Vec<ProductRow> = qb.build_query_as().fetch_all(&self.pool).await?;

        Ok((
            rows.into_iter().map(ProductRow::into_product).collect(),
            total as u64,
        ))
    }

    async fn search_text(&self, term: &str) -> CatalogResult<Vec<Product>> {
        let pattern = format!("%{}%", term);
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS} FROM products
            WHERE is_active = TRUE
              AND (name ILIKE $1 OR description ILIKE $1)
            ORDER BY name ASC
            "#
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn find_by_category(&self, category_id: &CategoryId) -> CatalogResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS} FROM products
            WHERE is_active = TRUE AND category_id = $1
            ORDER BY name ASC
            "#
        ))
        .bind(category_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }
}

// ============================================================================
// Category Repository Implementation
// ============================================================================

impl CategoryRepository for PgCatalogRepository {
    async fn insert(&self, category: &Category) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (
                category_id,
                name,
                description,
                is_active,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(category.category_id.as_uuid())
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.is_active)
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &CategoryId) -> CatalogResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE category_id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }

    async fn find_active_by_id(&self, id: &CategoryId) -> CatalogResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE category_id = $1 AND is_active = TRUE"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }

    async fn exists_by_name(&self, name: &str) -> CatalogResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, category: &Category) -> CatalogResult<()> {
        sqlx::query(
            r#"
            UPDATE categories SET
                name = $2,
                description = $3,
                is_active = $4,
                updated_at = $5
            WHERE category_id = $1
            "#,
        )
        .bind(category.category_id.as_uuid())
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.is_active)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_active(&self) -> CatalogResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE is_active = TRUE ORDER BY name ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    name: String,
    description: Option<String>,
    price: Decimal,
    stock: i32,
    category_id: Option<Uuid>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category_id: self.category_id.map(CategoryId::from_uuid),
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    category_id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            category_id: CategoryId::from_uuid(self.category_id),
            name: self.name,
            description: self.description,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
