//! PostgreSQL 分类仓储实现

use async_trait::async_trait;
use kasir_adapter_postgres::{map_sqlx_error, timed};
use kasir_errors::AppResult;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::{Category, CategoryPayload, CategoryRepository};

const TABLE: &str = "categories";

#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn get_all(&self, limit: i64, offset: i64) -> AppResult<(Vec<Category>, i64)> {
        timed(TABLE, "get_all", async {
            // 计数与分页查询不在同一事务内，并发写入时总数可能与当前页不一致
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            let rows = sqlx::query_as::<_, CategoryRow>(
                "SELECT id, name FROM categories ORDER BY id LIMIT $1 OFFSET $2",
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok((rows.into_iter().map(Category::from).collect(), total))
        })
        .await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        timed(TABLE, "get_by_id", async {
            let row = sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            Ok(row.map(Category::from))
        })
        .await
    }

    async fn create(&self, payload: &CategoryPayload) -> AppResult<Category> {
        timed(TABLE, "create", async {
            let id: i32 = sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
                .bind(&payload.name)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            Ok(Category {
                id,
                name: payload.name.clone(),
            })
        })
        .await
    }

    async fn update(&self, id: i32, payload: &CategoryPayload) -> AppResult<Option<Category>> {
        timed(TABLE, "update", async {
            let result = sqlx::query("UPDATE categories SET name = $1 WHERE id = $2")
                .bind(&payload.name)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            if result.rows_affected() == 0 {
                return Ok(None);
            }

            Ok(Some(Category {
                id,
                name: payload.name.clone(),
            }))
        })
        .await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        timed(TABLE, "delete", async {
            let result = sqlx::query("DELETE FROM categories WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            debug!(id, rows_affected = result.rows_affected(), "Category delete executed");
            Ok(())
        })
        .await
    }
}
