//! 请求提取器
//!
//! 提取失败统一转换为 [`AppError::Validation`]，以统一响应格式返回 400。

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use kasir_errors::AppError;
use serde::de::DeserializeOwned;

/// 路径中的整数 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation("Invalid ID"))?;

        raw.parse::<i32>()
            .map(IdPath)
            .map_err(|_| AppError::validation("Invalid ID"))
    }
}

/// JSON 请求体，不要求 `Content-Type` 头
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::validation(e.to_string()))
    }
}

/// 列表查询参数
///
/// 重复的键取第一个值，无法解析的值视为未提供，提取本身从不失败。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    page: Option<i64>,
    page_size: Option<i64>,
}

impl ListQuery {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        Self {
            page: parse_number(first("page")),
            page_size: parse_number(first("page_size")),
        }
    }

    pub fn page(&self) -> Option<i64> {
        self.page
    }

    pub fn page_size(&self) -> Option<i64> {
        self.page_size
    }
}

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        Ok(Self::from_pairs(&pairs))
    }
}

fn parse_number(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}
