use super::{vanished, Repository};
use crate::error::AppError;
use crate::model::Customer;
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, email, phone_number, address, loyalty_pts";

#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        PgCustomerRepository { pool }
    }
}

#[async_trait]
impl Repository<Customer> for PgCustomerRepository {
    async fn save(&self, customer: Customer) -> Result<Customer, AppError> {
        let sql = format!(
            "INSERT INTO customers (name, email, phone_number, address, loyalty_pts) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.phone_number)
            .bind(&customer.address)
            .bind(customer.loyalty_pts)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, AppError> {
        let sql = format!(
            "UPDATE customers SET name = $1, email = $2, phone_number = $3, address = $4, loyalty_pts = $5 \
             WHERE id = $6 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id = customer.id, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.phone_number)
            .bind(&customer.address)
            .bind(customer.loyalty_pts)
            .bind(customer.id)
            .fetch_optional(&self.pool)
            .await?;
        vanished(row, customer.id)
    }

    async fn delete(&self, customer: &Customer) -> Result<(), AppError> {
        tracing::debug!(id = customer.id, "DELETE FROM customers");
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(customer.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Customer, AppError> {
        let sql = format!("SELECT {} FROM customers WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let sql = format!("SELECT {} FROM customers ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Customer>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
