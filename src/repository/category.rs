use super::{vanished, Repository};
use crate::error::AppError;
use crate::model::Category;
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name";

#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        PgCategoryRepository { pool }
    }
}

#[async_trait]
impl Repository<Category> for PgCategoryRepository {
    async fn save(&self, category: Category) -> Result<Category, AppError> {
        let sql = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {}", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Category>(&sql)
            .bind(&category.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, category: Category) -> Result<Category, AppError> {
        let sql = format!("UPDATE categories SET name = $1 WHERE id = $2 RETURNING {}", COLUMNS);
        tracing::debug!(sql = %sql, id = category.id, "query");
        let row = sqlx::query_as::<_, Category>(&sql)
            .bind(&category.name)
            .bind(category.id)
            .fetch_optional(&self.pool)
            .await?;
        vanished(row, category.id)
    }

    async fn delete(&self, category: &Category) -> Result<(), AppError> {
        tracing::debug!(id = category.id, "DELETE FROM categories");
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(category.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Category, AppError> {
        let sql = format!("SELECT {} FROM categories WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Category>, AppError> {
        let sql = format!("SELECT {} FROM categories ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Category>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
