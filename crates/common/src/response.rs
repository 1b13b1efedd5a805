//! 统一 JSON 响应封装
//!
//! 所有接口均返回 `{code, status, message, data, meta}` 结构，
//! `meta` 仅在分页列表中出现，其余情况为 `null`。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::PaginationMeta;

/// 响应状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// 无数据响应的 `data` 类型，始终序列化为 `null`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoData;

/// 响应封装
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub status: ResponseStatus,
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<PaginationMeta>,
}

impl<T> ApiResponse<T> {
    fn new(
        code: StatusCode,
        status: ResponseStatus,
        message: impl Into<String>,
        data: Option<T>,
        meta: Option<PaginationMeta>,
    ) -> Self {
        Self {
            code: code.as_u16(),
            status,
            message: message.into(),
            data,
            meta,
        }
    }

    /// 200 成功响应
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, ResponseStatus::Success, message, Some(data), None)
    }

    /// 200 成功响应（带分页信息）
    pub fn paginated(message: impl Into<String>, data: T, meta: PaginationMeta) -> Self {
        Self::new(
            StatusCode::OK,
            ResponseStatus::Success,
            message,
            Some(data),
            Some(meta),
        )
    }

    /// 201 创建成功响应
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::new(
            StatusCode::CREATED,
            ResponseStatus::Success,
            message,
            Some(data),
            None,
        )
    }

    /// 错误响应，`data` 与 `meta` 均为 `null`
    pub fn error(code: StatusCode, message: impl Into<String>) -> Self {
        Self::new(code, ResponseStatus::Error, message, None, None)
    }
}

impl ApiResponse<NoData> {
    /// 无数据的 200 成功响应
    pub fn empty(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, ResponseStatus::Success, message, None, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
