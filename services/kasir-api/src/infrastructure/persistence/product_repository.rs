//! PostgreSQL 商品仓储实现
//!
//! 读取均内连接 `categories` 以填充分类名称，分类缺失的商品不会出现在结果中。

use async_trait::async_trait;
use kasir_adapter_postgres::{map_sqlx_error, timed};
use kasir_errors::{AppError, AppResult};
use sqlx::PgPool;
use tracing::debug;

use crate::domain::{Product, ProductPayload, ProductRepository};

const TABLE: &str = "products";

const SELECT_PRODUCT: &str = r#"
    SELECT p.id, p.name, p.price, p.stock, p.category_id, c.name AS category_name
    FROM products p
    JOIN categories c ON p.category_id = c.id
"#;

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    price: i32,
    stock: i32,
    category_id: i32,
    category_name: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            stock: row.stock,
            category_id: row.category_id,
            category_name: row.category_name,
        }
    }
}

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!("{} WHERE p.id = $1", SELECT_PRODUCT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(Product::from))
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn get_all(&self, limit: i64, offset: i64) -> AppResult<(Vec<Product>, i64)> {
        timed(TABLE, "get_all", async {
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            let rows = sqlx::query_as::<_, ProductRow>(&format!(
                "{} ORDER BY p.id LIMIT $1 OFFSET $2",
                SELECT_PRODUCT
            ))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok((rows.into_iter().map(Product::from).collect(), total))
        })
        .await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        timed(TABLE, "get_by_id", self.fetch_by_id(id)).await
    }

    async fn create(&self, payload: &ProductPayload) -> AppResult<Product> {
        timed(TABLE, "create", async {
            let id: i32 = sqlx::query_scalar(
                "INSERT INTO products (name, price, stock, category_id) VALUES ($1, $2, $3, $4) RETURNING id",
            )
            .bind(&payload.name)
            .bind(payload.price)
            .bind(payload.stock)
            .bind(payload.category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            // 插入与回读之间没有事务，回读失败按存储错误处理
            self.fetch_by_id(id)
                .await?
                .ok_or_else(|| AppError::database(format!("Product {} not found after insert", id)))
        })
        .await
    }

    async fn update(&self, id: i32, payload: &ProductPayload) -> AppResult<Option<Product>> {
        timed(TABLE, "update", async {
            let result = sqlx::query(
                "UPDATE products SET name = $1, price = $2, stock = $3, category_id = $4 WHERE id = $5",
            )
            .bind(&payload.name)
            .bind(payload.price)
            .bind(payload.stock)
            .bind(payload.category_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            if result.rows_affected() == 0 {
                return Ok(None);
            }

            self.fetch_by_id(id).await
        })
        .await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        timed(TABLE, "delete", async {
            let result = sqlx::query("DELETE FROM products WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            debug!(id, rows_affected = result.rows_affected(), "Product delete executed");
            Ok(())
        })
        .await
    }
}
