//! 路由注册与共享状态

use std::sync::Arc;

use axum::{Router, routing::get};
use sqlx::PgPool;

use super::{category_handler, health, openapi, product_handler};
use crate::application::{CategoryService, ProductService};
use crate::domain::{CategoryRepository, ProductRepository};
use crate::infrastructure::health::{HealthCheck, PostgresHealthCheck};
use crate::infrastructure::persistence::{PostgresCategoryRepository, PostgresProductRepository};

/// 请求间共享的状态，仅包含服务与连接池的引用
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CategoryService>,
    pub products: Arc<ProductService>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
        health: Arc<dyn HealthCheck>,
    ) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(categories)),
            products: Arc::new(ProductService::new(products)),
            health,
        }
    }

    /// 基于 PostgreSQL 连接池装配全部依赖
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresCategoryRepository::new(pool.clone())),
            Arc::new(PostgresProductRepository::new(pool.clone())),
            Arc::new(PostgresHealthCheck::new(pool)),
        )
    }
}

/// 业务路由，外加 Swagger UI 与 OpenAPI JSON
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        // Category Routes
        .route(
            "/api/categories",
            get(category_handler::list_categories).post(category_handler::create_category),
        )
        .route(
            "/api/categories/{id}",
            get(category_handler::get_category)
                .put(category_handler::update_category)
                .delete(category_handler::delete_category),
        )
        // Product Routes
        .route(
            "/api/products",
            get(product_handler::list_products).post(product_handler::create_product),
        )
        .route(
            "/api/products/{id}",
            get(product_handler::get_product)
                .put(product_handler::update_product)
                .delete(product_handler::delete_product),
        )
        .with_state(state)
        .merge(openapi::swagger_ui())
}
