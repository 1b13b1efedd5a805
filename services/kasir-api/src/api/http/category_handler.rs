//! 分类接口

use axum::extract::State;
use kasir_common::{ApiResponse, NoData};
use kasir_errors::{AppError, AppResult};
use tracing::info;

use super::extract::{IdPath, JsonBody, ListQuery};
use super::routes::AppState;
use crate::domain::{Category, CategoryPayload};

/// GET /api/categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("page_size" = Option<i64>, Query, description = "Page size, default 10")
    ),
    responses(
        (status = 200, description = "Categories retrieved", body = ApiResponse<Vec<Category>>),
        (status = 500, description = "Store failure", body = ApiResponse<NoData>)
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    query: ListQuery,
) -> AppResult<ApiResponse<Vec<Category>>> {
    let paged = state.categories.list(query.page(), query.page_size()).await?;
    Ok(ApiResponse::paginated(
        "Categories retrieved successfully",
        paged.items,
        paged.meta,
    ))
}

/// POST /api/categories
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "categories",
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Category>),
        (status = 400, description = "Invalid payload", body = ApiResponse<NoData>),
        (status = 500, description = "Store failure", body = ApiResponse<NoData>)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CategoryPayload>,
) -> AppResult<ApiResponse<Category>> {
    payload.validate()?;

    let category = state.categories.create(&payload).await?;
    info!(id = category.id, "Category created");
    Ok(ApiResponse::created("Category created successfully", category))
}

/// GET /api/categories/{id}
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category retrieved", body = ApiResponse<Category>),
        (status = 400, description = "Invalid ID", body = ApiResponse<NoData>),
        (status = 404, description = "Category not found", body = ApiResponse<NoData>),
        (status = 500, description = "Store failure", body = ApiResponse<NoData>)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<Category>> {
    let category = state
        .categories
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;

    Ok(ApiResponse::success("Category retrieved successfully", category))
}

/// PUT /api/categories/{id}
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Category>),
        (status = 400, description = "Invalid ID or payload", body = ApiResponse<NoData>),
        (status = 404, description = "Category not found", body = ApiResponse<NoData>),
        (status = 500, description = "Store failure", body = ApiResponse<NoData>)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<CategoryPayload>,
) -> AppResult<ApiResponse<Category>> {
    payload.validate()?;

    let category = state
        .categories
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;

    info!(id, "Category updated");
    Ok(ApiResponse::success("Category updated successfully", category))
}

/// DELETE /api/categories/{id}
///
/// 删除不存在的 ID 同样返回成功。
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted, also when absent", body = ApiResponse<NoData>),
        (status = 400, description = "Invalid ID", body = ApiResponse<NoData>),
        (status = 500, description = "Store failure", body = ApiResponse<NoData>)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<ApiResponse<NoData>> {
    state.categories.delete(id).await?;

    info!(id, "Category deleted");
    Ok(ApiResponse::empty("Category deleted successfully"))
}
