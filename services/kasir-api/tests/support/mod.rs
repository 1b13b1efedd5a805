//! 测试辅助：内存仓储与请求工具
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use kasir_api::api::{AppState, router};
use kasir_api::domain::{
    Category, CategoryPayload, CategoryRepository, Product, ProductPayload, ProductRepository,
};
use kasir_api::infrastructure::health::HealthCheck;
use kasir_errors::{AppError, AppResult};
use serde_json::Value;
use tower::ServiceExt;

// --- In-memory store ---

#[derive(Default)]
struct StoreData {
    categories: BTreeMap<i32, String>,
    products: BTreeMap<i32, ProductPayload>,
    last_category_id: i32,
    last_product_id: i32,
}

/// 模拟数据库：自增 ID、外键校验、内连接读取
#[derive(Default)]
pub struct InMemoryStore {
    data: Mutex<StoreData>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn category_count(&self) -> usize {
        self.data.lock().unwrap().categories.len()
    }

    pub fn product_count(&self) -> usize {
        self.data.lock().unwrap().products.len()
    }

    pub fn category_name(&self, id: i32) -> Option<String> {
        self.data.lock().unwrap().categories.get(&id).cloned()
    }
}

fn join_product(data: &StoreData, id: i32, payload: &ProductPayload) -> Option<Product> {
    let category_name = data.categories.get(&payload.category_id)?;
    Some(Product {
        id,
        name: payload.name.clone(),
        price: payload.price,
        stock: payload.stock,
        category_id: payload.category_id,
        category_name: category_name.clone(),
    })
}

fn foreign_key_violation() -> AppError {
    AppError::database(
        "insert or update on table \"products\" violates foreign key constraint \"products_category_id_fkey\"",
    )
}

pub struct InMemoryCategoryRepository(pub Arc<InMemoryStore>);

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_all(&self, limit: i64, offset: i64) -> AppResult<(Vec<Category>, i64)> {
        let data = self.0.data.lock().unwrap();
        let items = data
            .categories
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|(id, name)| Category { id: *id, name: name.clone() })
            .collect();
        Ok((items, data.categories.len() as i64))
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        let data = self.0.data.lock().unwrap();
        Ok(data.categories.get(&id).map(|name| Category { id, name: name.clone() }))
    }

    async fn create(&self, payload: &CategoryPayload) -> AppResult<Category> {
        let mut data = self.0.data.lock().unwrap();
        data.last_category_id += 1;
        let id = data.last_category_id;
        data.categories.insert(id, payload.name.clone());
        Ok(Category { id, name: payload.name.clone() })
    }

    async fn update(&self, id: i32, payload: &CategoryPayload) -> AppResult<Option<Category>> {
        let mut data = self.0.data.lock().unwrap();
        match data.categories.get_mut(&id) {
            Some(name) => {
                *name = payload.name.clone();
                Ok(Some(Category { id, name: payload.name.clone() }))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.0.data.lock().unwrap().categories.remove(&id);
        Ok(())
    }
}

pub struct InMemoryProductRepository(pub Arc<InMemoryStore>);

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self, limit: i64, offset: i64) -> AppResult<(Vec<Product>, i64)> {
        let data = self.0.data.lock().unwrap();
        let items = data
            .products
            .iter()
            .filter_map(|(id, payload)| join_product(&data, *id, payload))
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((items, data.products.len() as i64))
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let data = self.0.data.lock().unwrap();
        Ok(data
            .products
            .get(&id)
            .and_then(|payload| join_product(&data, id, payload)))
    }

    async fn create(&self, payload: &ProductPayload) -> AppResult<Product> {
        let mut data = self.0.data.lock().unwrap();
        if !data.categories.contains_key(&payload.category_id) {
            return Err(foreign_key_violation());
        }
        data.last_product_id += 1;
        let id = data.last_product_id;
        data.products.insert(id, payload.clone());
        join_product(&data, id, payload).ok_or_else(|| AppError::database("refetch failed"))
    }

    async fn update(&self, id: i32, payload: &ProductPayload) -> AppResult<Option<Product>> {
        let mut data = self.0.data.lock().unwrap();
        if !data.products.contains_key(&id) {
            return Ok(None);
        }
        if !data.categories.contains_key(&payload.category_id) {
            return Err(foreign_key_violation());
        }
        data.products.insert(id, payload.clone());
        Ok(join_product(&data, id, payload))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.0.data.lock().unwrap().products.remove(&id);
        Ok(())
    }
}

// --- Failing doubles ---

/// 所有分类操作都返回数据库错误
pub struct UnreachableCategoryRepository;

#[async_trait]
impl CategoryRepository for UnreachableCategoryRepository {
    async fn get_all(&self, _limit: i64, _offset: i64) -> AppResult<(Vec<Category>, i64)> {
        Err(AppError::database("connection refused"))
    }
    async fn get_by_id(&self, _id: i32) -> AppResult<Option<Category>> {
        Err(AppError::database("connection refused"))
    }
    async fn create(&self, _payload: &CategoryPayload) -> AppResult<Category> {
        Err(AppError::database("connection refused"))
    }
    async fn update(&self, _id: i32, _payload: &CategoryPayload) -> AppResult<Option<Category>> {
        Err(AppError::database("connection refused"))
    }
    async fn delete(&self, _id: i32) -> AppResult<()> {
        Err(AppError::database("connection refused"))
    }
}

pub struct StaticHealthCheck {
    pub healthy: bool,
}

#[async_trait]
impl HealthCheck for StaticHealthCheck {
    async fn check(&self) -> AppResult<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(AppError::database("connection refused"))
        }
    }

    fn component_name(&self) -> &'static str {
        "database"
    }
}

// --- App helpers ---

pub fn app(store: &Arc<InMemoryStore>) -> Router {
    router(AppState::new(
        Arc::new(InMemoryCategoryRepository(store.clone())),
        Arc::new(InMemoryProductRepository(store.clone())),
        Arc::new(StaticHealthCheck { healthy: true }),
    ))
}

pub fn app_with_state(state: AppState) -> Router {
    router(state)
}

/// 发送请求并解析 JSON 响应
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}
