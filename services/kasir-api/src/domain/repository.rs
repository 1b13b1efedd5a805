//! 仓储接口

use async_trait::async_trait;
use kasir_errors::AppResult;

use super::category::{Category, CategoryPayload};
use super::product::{Product, ProductPayload};

/// 分类仓储接口
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// 按 id 升序分页查询，同时返回总数
    async fn get_all(&self, limit: i64, offset: i64) -> AppResult<(Vec<Category>, i64)>;

    /// 根据 ID 查找，不存在时返回 `None`
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Category>>;

    /// 创建分类，返回带存储分配 ID 的实体
    async fn create(&self, payload: &CategoryPayload) -> AppResult<Category>;

    /// 更新分类，未命中时返回 `None`
    async fn update(&self, id: i32, payload: &CategoryPayload) -> AppResult<Option<Category>>;

    /// 删除分类，记录不存在不视为错误
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// 商品仓储接口
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 按 id 升序分页查询（关联分类名称），同时返回总数
    async fn get_all(&self, limit: i64, offset: i64) -> AppResult<(Vec<Product>, i64)>;

    /// 根据 ID 查找，不存在时返回 `None`
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Product>>;

    /// 创建商品并重新读取以填充分类名称
    async fn create(&self, payload: &ProductPayload) -> AppResult<Product>;

    /// 更新商品，未命中时返回 `None`
    async fn update(&self, id: i32, payload: &ProductPayload) -> AppResult<Option<Product>>;

    /// 删除商品，记录不存在不视为错误
    async fn delete(&self, id: i32) -> AppResult<()>;
}
