//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;

use kernel::id::{CategoryId, ProductId};

use crate::application::{
    CreateCategoryUseCase, CreateProductUseCase, GetCategoryUseCase, GetProductUseCase,
    ListCategoriesUseCase, ListProductsUseCase, RemoveCategoryUseCase, RemoveProductUseCase,
    SearchProductsUseCase, UpdateCategoryUseCase, UpdateProductUseCase,
};
use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{
    CategoryDetailResponse, CategoryResponse, CreateCategoryRequest, CreateProductRequest,
    ListProductsQuery, ProductListResponse, ProductResponse, SearchProductsQuery,
    UpdateCategoryRequest, UpdateProductRequest,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

fn parse_path_id(path: Result<Path<Uuid>, PathRejection>) -> CatalogResult<Uuid> {
    let Path(id) = path.map_err(|_| CatalogError::Validation(vec!["id: must be a UUID".into()]))?;
    Ok(id)
}

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> CatalogResult<T> {
    let Json(req) = body.map_err(|e| CatalogError::Validation(vec![e.body_text()]))?;
    Ok(req)
}

// ============================================================================
// Products
// ============================================================================

/// POST /api/products
pub async fn create_product<R>(
    State(state): State<CatalogAppState<R>>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> CatalogResult<(StatusCode, Json<ProductResponse>)>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let draft = parse_body(body)?
        .validate()
        .map_err(CatalogError::Validation)?;

    let use_case = CreateProductUseCase::new(state.repo.clone());
    let product = use_case.execute(draft).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(&product))))
}

/// GET /api/products
pub async fn list_products<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<ListProductsQuery>,
) -> CatalogResult<Json<ProductListResponse>>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let (filter, sort, page) = query.validate().map_err(CatalogError::Validation)?;

    let use_case = ListProductsUseCase::new(state.repo.clone());
    let result = use_case.execute(filter, sort, page).await?;

    Ok(Json(ProductListResponse::from(&result)))
}

/// GET /api/products/search
pub async fn search_products<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<SearchProductsQuery>,
) -> CatalogResult<Json<Vec<ProductResponse>>>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let term = query.validate().map_err(CatalogError::Validation)?;

    let use_case = SearchProductsUseCase::new(state.repo.clone());
    let products = use_case.execute(&term).await?;

    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// GET /api/products/{id}
pub async fn get_product<R>(
    State(state): State<CatalogAppState<R>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let id = ProductId::from_uuid(parse_path_id(path)?);

    let use_case = GetProductUseCase::new(state.repo.clone());
    let product = use_case.execute(id).await?;

    Ok(Json(ProductResponse::from(&product)))
}

/// PATCH /api/products/{id}
pub async fn update_product<R>(
    State(state): State<CatalogAppState<R>>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let id = ProductId::from_uuid(parse_path_id(path)?);
    let patch = parse_body(body)?
        .validate()
        .map_err(CatalogError::Validation)?;

    let use_case = UpdateProductUseCase::new(state.repo.clone());
    let product = use_case.execute(id, patch).await?;

    Ok(Json(ProductResponse::from(&product)))
}

/// DELETE /api/products/{id}
pub async fn remove_product<R>(
    State(state): State<CatalogAppState<R>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> CatalogResult<StatusCode>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let id = ProductId::from_uuid(parse_path_id(path)?);

    let use_case = RemoveProductUseCase::new(state.repo.clone());
    use_case.execute(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Categories
// ============================================================================

/// POST /api/categories
pub async fn create_category<R>(
    State(state): State<CatalogAppState<R>>,
    body: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> CatalogResult<(StatusCode, Json<CategoryResponse>)>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let draft = parse_body(body)?
        .validate()
        .map_err(CatalogError::Validation)?;

    let use_case = CreateCategoryUseCase::new(state.repo.clone());
    let category = use_case.execute(draft).await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(&category))))
}

/// GET /api/categories
pub async fn list_categories<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<CategoryResponse>>>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCategoriesUseCase::new(state.repo.clone());
    let categories = use_case.execute().await?;

    Ok(Json(categories.iter().map(CategoryResponse::from).collect()))
}

/// GET /api/categories/{id}
pub async fn get_category<R>(
    State(state): State<CatalogAppState<R>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> CatalogResult<Json<CategoryDetailResponse>>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let id = CategoryId::from_uuid(parse_path_id(path)?);

    let use_case = GetCategoryUseCase::new(state.repo.clone(), state.repo.clone());
    let detail = use_case.execute(id).await?;

    Ok(Json(CategoryDetailResponse {
        category: CategoryResponse::from(&detail.category),
        products: detail.products.iter().map(ProductResponse::from).collect(),
    }))
}

/// PATCH /api/categories/{id}
pub async fn update_category<R>(
    State(state): State<CatalogAppState<R>>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> CatalogResult<Json<CategoryResponse>>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let id = CategoryId::from_uuid(parse_path_id(path)?);
    let patch = parse_body(body)?
        .validate()
        .map_err(CatalogError::Validation)?;

    let use_case = UpdateCategoryUseCase::new(state.repo.clone());
    let category = use_case.execute(id, patch).await?;

    Ok(Json(CategoryResponse::from(&category)))
}

/// DELETE /api/categories/{id}
pub async fn remove_category<R>(
    State(state): State<CatalogAppState<R>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> CatalogResult<StatusCode>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let id = CategoryId::from_uuid(parse_path_id(path)?);

    let use_case = RemoveCategoryUseCase::new(state.repo.clone());
    use_case.execute(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
