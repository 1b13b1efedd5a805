//! 基础设施资源管理

use kasir_adapter_postgres::{PostgresConfig, create_pool};
use kasir_config::AppConfig;
use kasir_errors::AppResult;
use metrics_exporter_prometheus::PrometheusHandle;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::{info, warn};

/// 基础设施资源容器
pub struct Infrastructure {
    /// 应用配置
    config: AppConfig,
    /// PostgreSQL 连接池
    postgres_pool: PgPool,
    /// Prometheus 句柄（recorder 安装失败时为空）
    metrics_handle: Option<PrometheusHandle>,
}

impl Infrastructure {
    /// 从配置创建基础设施资源
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let db = &config.database;
        let pg_config = PostgresConfig::new(db.url.expose_secret())
            .with_max_connections(db.max_connections)
            .with_min_connections(db.min_connections)
            .with_acquire_timeout(db.acquire_timeout())
            .with_idle_timeout(db.idle_timeout())
            .with_max_lifetime(db.max_lifetime());
        let postgres_pool = create_pool(&pg_config).await?;

        let metrics_handle = match kasir_telemetry::init_metrics() {
            Ok(handle) => {
                info!("Prometheus recorder installed");
                Some(handle)
            }
            Err(e) => {
                warn!(error = %e, "Failed to install Prometheus recorder, /metrics disabled");
                None
            }
        };

        Ok(Self {
            config,
            postgres_pool,
            metrics_handle,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    pub fn metrics_handle(&self) -> Option<PrometheusHandle> {
        self.metrics_handle.clone()
    }
}
