//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::net::SocketAddr;

use axum::{Router, routing::get};
use kasir_config::AppConfig;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::infrastructure::Infrastructure;
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 负责：
/// 1. 加载 `.env` 与配置
/// 2. 初始化日志
/// 3. 创建数据库连接池与指标 recorder
/// 4. 调用闭包构建业务路由
/// 5. 启动监听并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// kasir_bootstrap::run("config", |infra| api::router(infra.postgres_pool())).await
/// ```
pub async fn run<F>(config_dir: &str, router_builder: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&Infrastructure) -> Router,
{
    // 1. 加载配置
    dotenvy::dotenv().ok();
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);
    info!("Starting {} service", config.app_name);

    // 3. 创建基础设施
    let infra = Infrastructure::from_config(config).await?;

    // 4. 构建路由
    let mut app = router_builder(&infra);
    if let Some(handle) = infra.metrics_handle() {
        app = app.route("/metrics", get(move || std::future::ready(handle.render())));
    }
    let app = app.layer(TraceLayer::new_for_http());

    // 5. 启动服务器
    let addr: SocketAddr = infra.config().server.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");
    Ok(())
}
