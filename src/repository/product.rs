use super::{vanished, Repository};
use crate::error::AppError;
use crate::model::Product;
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, description, price, stock_qty, category_id, sku, tax_rate";

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        PgProductRepository { pool }
    }
}

#[async_trait]
impl Repository<Product> for PgProductRepository {
    /// Fails with a foreign-key violation when `category_id` names no category.
    async fn save(&self, product: Product) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO products (name, description, price, stock_qty, category_id, sku, tax_rate) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock_qty)
            .bind(product.category_id)
            .bind(&product.sku)
            .bind(product.tax_rate)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, product: Product) -> Result<Product, AppError> {
        let sql = format!(
            "UPDATE products SET name = $1, description = $2, price = $3, stock_qty = $4, \
             category_id = $5, sku = $6, tax_rate = $7 WHERE id = $8 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id = product.id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock_qty)
            .bind(product.category_id)
            .bind(&product.sku)
            .bind(product.tax_rate)
            .bind(product.id)
            .fetch_optional(&self.pool)
            .await?;
        vanished(row, product.id)
    }

    async fn delete(&self, product: &Product) -> Result<(), AppError> {
        tracing::debug!(id = product.id, "DELETE FROM products");
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Product, AppError> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {} FROM products ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
