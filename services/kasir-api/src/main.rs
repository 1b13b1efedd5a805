//! Kasir API 服务入口

use kasir_api::api::{AppState, router};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    kasir_bootstrap::run("config", |infra| {
        let state = AppState::from_pool(infra.postgres_pool());
        info!("Repositories initialized");
        router(state)
    })
    .await
}
