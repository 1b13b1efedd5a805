//! 分类服务

use std::sync::Arc;

use kasir_common::{Paged, Pagination};
use kasir_errors::AppResult;
use tracing::debug;

use crate::domain::{Category, CategoryPayload, CategoryRepository};

/// 分类服务：规范化分页参数，其余操作直接委托仓储
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, page: Option<i64>, page_size: Option<i64>) -> AppResult<Paged<Category>> {
        let pagination = Pagination::normalize(page, page_size);
        let (items, total) = self
            .repository
            .get_all(pagination.limit(), pagination.offset())
            .await?;

        debug!(page = pagination.page, page_size = pagination.page_size, total, "Categories listed");
        Ok(Paged::new(items, total, &pagination))
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<Category>> {
        self.repository.get_by_id(id).await
    }

    pub async fn create(&self, payload: &CategoryPayload) -> AppResult<Category> {
        self.repository.create(payload).await
    }

    pub async fn update(&self, id: i32, payload: &CategoryPayload) -> AppResult<Option<Category>> {
        self.repository.update(id, payload).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
