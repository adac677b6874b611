//! Idempotent schema for the four resource tables. Applied at startup.
//! Order follows foreign-key dependencies: categories before products.

use crate::error::AppError;
use sqlx::PgPool;

const DDL: &[(&str, &str)] = &[
    (
        "categories",
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(32) NOT NULL
        )
        "#,
    ),
    (
        "customers",
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(32) NOT NULL,
            email TEXT NOT NULL,
            phone_number VARCHAR(30) NOT NULL,
            address VARCHAR(255) NOT NULL,
            loyalty_pts INTEGER NOT NULL DEFAULT 0
        )
        "#,
    ),
    (
        "employees",
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(32) NOT NULL,
            role VARCHAR(32) NOT NULL,
            email TEXT NOT NULL,
            phone_number VARCHAR(30) NOT NULL,
            date_hired VARCHAR(30) NOT NULL
        )
        "#,
    ),
    (
        "products",
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(32) NOT NULL,
            description VARCHAR(255) NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            stock_qty INTEGER NOT NULL DEFAULT 0,
            category_id BIGINT NOT NULL REFERENCES categories (id),
            sku VARCHAR(64) NOT NULL,
            tax_rate DOUBLE PRECISION NOT NULL DEFAULT 0
        )
        "#,
    ),
];

/// Table names in creation order.
pub fn managed_tables() -> impl Iterator<Item = &'static str> {
    DDL.iter().map(|(table, _)| *table)
}

/// Create any missing resource tables. Existing tables are left untouched.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for (table, ddl) in DDL {
        tracing::debug!(table, "ensuring table");
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!(tables = DDL.len(), "schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_created_before_products() {
        let order: Vec<_> = managed_tables().collect();
        let categories = order.iter().position(|t| *t == "categories").unwrap();
        let products = order.iter().position(|t| *t == "products").unwrap();
        assert!(categories < products);
    }

    #[test]
    fn every_statement_is_idempotent() {
        for (table, ddl) in DDL {
            assert!(ddl.contains(&format!("CREATE TABLE IF NOT EXISTS {}", table)), "{table}");
        }
    }

    #[test]
    fn products_reference_categories() {
        let (_, ddl) = DDL.iter().find(|(t, _)| *t == "products").unwrap();
        assert!(ddl.contains("REFERENCES categories (id)"));
    }
}
