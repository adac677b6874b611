//! Persistence gateways: one row-level operation per call against PostgreSQL.
//!
//! `find_by_id` reports a missing row as `sqlx::Error::RowNotFound` so services
//! can tell it apart from other store failures.

mod category;
mod customer;
mod employee;
mod product;

pub use category::PgCategoryRepository;
pub use customer::PgCustomerRepository;
pub use employee::PgEmployeeRepository;
pub use product::PgProductRepository;

use crate::error::AppError;
use crate::model::Entity;
use async_trait::async_trait;

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Insert a new row. The returned entity carries the store-assigned id.
    async fn save(&self, entity: E) -> Result<E, AppError>;

    /// Overwrite the row with the entity's id. A vanished row is a persistence failure.
    async fn update(&self, entity: E) -> Result<E, AppError>;

    /// Remove the row with the entity's id. Deleting an absent row is not an error.
    async fn delete(&self, entity: &E) -> Result<(), AppError>;

    async fn find_by_id(&self, id: i64) -> Result<E, AppError>;

    /// All rows in id order.
    async fn find_all(&self) -> Result<Vec<E>, AppError>;
}

/// `UPDATE ... RETURNING` found nothing: the row was removed after it was loaded.
pub(crate) fn vanished<E: Entity>(result: Option<E>, id: i64) -> Result<E, AppError> {
    result.ok_or_else(|| {
        AppError::Persistence(format!("{} {} no longer exists", E::NAME.to_lowercase(), id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn missing_update_row_is_a_persistence_failure() {
        match vanished::<Category>(None, 5) {
            Err(AppError::Persistence(msg)) => assert_eq!(msg, "category 5 no longer exists"),
            other => panic!("expected persistence error, got {other:?}"),
        }
    }

    #[test]
    fn returned_row_passes_through() {
        let row = Category {
            id: 5,
            name: "Hot beverages".into(),
        };
        let kept = vanished(Some(row.clone()), 5).unwrap();
        assert_eq!(kept.id, 5);
        assert_eq!(kept.name, row.name);
    }
}
