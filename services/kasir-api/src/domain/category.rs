//! 商品分类

use kasir_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::null_as_default;

/// 商品分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// 创建/更新分类的请求体
///
/// 缺失或为 `null` 的字段取默认值，交由 [`CategoryPayload::validate`] 给出具体错误。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct CategoryPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

impl CategoryPayload {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        Ok(())
    }
}
