//! 商品服务

use std::sync::Arc;

use kasir_common::{Paged, Pagination};
use kasir_errors::AppResult;
use tracing::debug;

use crate::domain::{Product, ProductPayload, ProductRepository};

/// 商品服务
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, page: Option<i64>, page_size: Option<i64>) -> AppResult<Paged<Product>> {
        let pagination = Pagination::normalize(page, page_size);
        let (items, total) = self
            .repository
            .get_all(pagination.limit(), pagination.offset())
            .await?;

        debug!(page = pagination.page, page_size = pagination.page_size, total, "Products listed");
        Ok(Paged::new(items, total, &pagination))
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<Product>> {
        self.repository.get_by_id(id).await
    }

    pub async fn create(&self, payload: &ProductPayload) -> AppResult<Product> {
        self.repository.create(payload).await
    }

    pub async fn update(&self, id: i32, payload: &ProductPayload) -> AppResult<Option<Product>> {
        self.repository.update(id, payload).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
