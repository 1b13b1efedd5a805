//! 健康检查接口

use axum::extract::State;
use kasir_common::{ApiResponse, NoData};
use kasir_errors::{AppError, AppResult};
use serde::Serialize;
use utoipa::ToSchema;

use super::routes::AppState;

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "API Running", body = ApiResponse<NoData>))
)]
pub async fn health() -> ApiResponse<NoData> {
    ApiResponse::empty("API Running")
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(value_type = String)]
    pub component: &'static str,
    #[schema(value_type = String)]
    pub status: &'static str,
}

/// GET /ready
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = ApiResponse<ReadinessResponse>),
        (status = 503, description = "Database unreachable", body = ApiResponse<NoData>)
    )
)]
pub async fn ready(State(state): State<AppState>) -> AppResult<ApiResponse<ReadinessResponse>> {
    let component = state.health.component_name();
    state
        .health
        .check()
        .await
        .map_err(|e| AppError::unavailable(format!("{} unavailable: {}", component, e.message())))?;

    Ok(ApiResponse::success(
        "Service ready",
        ReadinessResponse {
            component,
            status: "up",
        },
    ))
}
