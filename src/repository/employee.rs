use super::{vanished, Repository};
use crate::error::AppError;
use crate::model::Employee;
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, role, email, phone_number, date_hired";

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeRepository { pool }
    }
}

#[async_trait]
impl Repository<Employee> for PgEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee, AppError> {
        let sql = format!(
            "INSERT INTO employees (name, role, email, phone_number, date_hired) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Employee>(&sql)
            .bind(&employee.name)
            .bind(&employee.role)
            .bind(&employee.email)
            .bind(&employee.phone_number)
            .bind(&employee.date_hired)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, employee: Employee) -> Result<Employee, AppError> {
        let sql = format!(
            "UPDATE employees SET name = $1, role = $2, email = $3, phone_number = $4, date_hired = $5 \
             WHERE id = $6 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id = employee.id, "query");
        let row = sqlx::query_as::<_, Employee>(&sql)
            .bind(&employee.name)
            .bind(&employee.role)
            .bind(&employee.email)
            .bind(&employee.phone_number)
            .bind(&employee.date_hired)
            .bind(employee.id)
            .fetch_optional(&self.pool)
            .await?;
        vanished(row, employee.id)
    }

    async fn delete(&self, employee: &Employee) -> Result<(), AppError> {
        tracing::debug!(id = employee.id, "DELETE FROM employees");
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(employee.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Employee, AppError> {
        let sql = format!("SELECT {} FROM employees WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let sql = format!("SELECT {} FROM employees ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
