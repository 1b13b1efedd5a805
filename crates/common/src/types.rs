//! 通用类型定义

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 未指定或非法时使用的每页条数
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// 分页参数（已规范化）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// 规范化请求中的分页参数
    ///
    /// `page` 小于 1 或缺省时取 1；`page_size` 小于 1 或缺省时取默认值。
    pub fn normalize(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: page.filter(|p| *p >= 1).unwrap_or(1),
            page_size: page_size.filter(|s| *s >= 1).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// 分页元信息，随列表响应返回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: i64,
    pub total: i64,
    pub total_page: i64,
}

impl PaginationMeta {
    pub fn new(pagination: &Pagination, total: i64) -> Self {
        let total = total.max(0);
        let page_size = pagination.page_size.max(1);
        let total_page = total / page_size + i64::from(total % page_size != 0);

        Self {
            page: pagination.page,
            total,
            total_page,
        }
    }
}

/// 分页结果
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, total: i64, pagination: &Pagination) -> Self {
        Self {
            items,
            meta: PaginationMeta::new(pagination, total),
        }
    }
}
