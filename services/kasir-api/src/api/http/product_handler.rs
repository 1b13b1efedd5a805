//! 商品接口

use axum::extract::State;
use kasir_common::{ApiResponse, NoData};
use kasir_errors::{AppError, AppResult};
use tracing::info;

use super::extract::{IdPath, JsonBody, ListQuery};
use super::routes::AppState;
use crate::domain::{Product, ProductPayload};

/// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("page_size" = Option<i64>, Query, description = "Page size, default 10")
    ),
    responses(
        (status = 200, description = "Products retrieved", body = ApiResponse<Vec<Product>>),
        (status = 500, description = "Store failure", body = ApiResponse<NoData>)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    query: ListQuery,
) -> AppResult<ApiResponse<Vec<Product>>> {
    let paged = state.products.list(query.page(), query.page_size()).await?;
    Ok(ApiResponse::paginated(
        "Products retrieved successfully",
        paged.items,
        paged.meta,
    ))
}

/// POST /api/products
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 400, description = "Invalid payload", body = ApiResponse<NoData>),
        (status = 500, description = "Store failure", body = ApiResponse<NoData>)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> AppResult<ApiResponse<Product>> {
    payload.validate()?;

    let product = state.products.create(&payload).await?;
    info!(id = product.id, category_id = product.category_id, "Product created");
    Ok(ApiResponse::created("Product created successfully", product))
}

/// GET /api/products/{id}
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product retrieved", body = ApiResponse<Product>),
        (status = 400, description = "Invalid ID", body = ApiResponse<NoData>),
        (status = 404, description = "Product not found", body = ApiResponse<NoData>),
        (status = 500, description = "Store failure", body = ApiResponse<NoData>)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Product>> {
    let product = state
        .products
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(ApiResponse::success("Product retrieved successfully", product))
}

/// PUT /api/products/{id}
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 400, description = "Invalid ID or payload", body = ApiResponse<NoData>),
        (status = 404, description = "Product not found", body = ApiResponse<NoData>),
        (status = 500, description = "Store failure", body = ApiResponse<NoData>)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> AppResult<ApiResponse<Product>> {
    payload.validate()?;

    let product = state
        .products
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    info!(id, "Product updated");
    Ok(ApiResponse::success("Product updated successfully", product))
}

/// DELETE /api/products/{id}
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted, also when absent", body = ApiResponse<NoData>),
        (status = 400, description = "Invalid ID", body = ApiResponse<NoData>),
        (status = 500, description = "Store failure", body = ApiResponse<NoData>)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<NoData>> {
    state.products.delete(id).await?;

    info!(id, "Product deleted");
    Ok(ApiResponse::empty("Product deleted successfully"))
}
