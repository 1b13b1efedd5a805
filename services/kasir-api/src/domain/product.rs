//! 商品

use kasir_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::null_as_default;

/// 商品，`category_name` 仅在读取时通过关联查询填充
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub stock: i32,
    pub category_id: i32,
    pub category_name: String,
}

/// 创建/更新商品的请求体
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub stock: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub category_id: i32,
}

impl ProductPayload {
    /// 按 名称 → 价格 → 库存 → 分类 的顺序校验，返回第一个错误
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if self.price <= 0 {
            return Err(AppError::validation("Price must be greater than 0"));
        }
        if self.stock < 0 {
            return Err(AppError::validation("Stock cannot be negative"));
        }
        if self.category_id <= 0 {
            return Err(AppError::validation("Category ID is required"));
        }
        Ok(())
    }
}
