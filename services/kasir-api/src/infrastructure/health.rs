//! 存储就绪检查

use async_trait::async_trait;
use kasir_errors::AppResult;
use sqlx::PgPool;

/// 健康检查 trait
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// 执行检查，失败时返回错误
    async fn check(&self) -> AppResult<()>;

    /// 获取组件名称
    fn component_name(&self) -> &'static str;
}

pub struct PostgresHealthCheck {
    pool: PgPool,
}

impl PostgresHealthCheck {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for PostgresHealthCheck {
    async fn check(&self) -> AppResult<()> {
        kasir_adapter_postgres::check_connection(&self.pool).await
    }

    fn component_name(&self) -> &'static str {
        "database"
    }
}
