//! Business services: validate requests, orchestrate gateway calls, map to wire shapes.

mod category;
mod customer;
mod employee;
mod product;
pub mod validation;

pub use category::CategoryService;
pub use customer::CustomerService;
pub use employee::EmployeeService;
pub use product::ProductService;
pub use validation::{Validate, Validator};

use crate::error::AppError;
use crate::model::{to_responses, Entity, WithId};
use crate::repository::Repository;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

/// The five operations every resource exposes. Controllers are written against this.
#[async_trait]
pub trait CrudService: Send + Sync + 'static {
    type CreateRequest: DeserializeOwned + Send + 'static;
    type UpdateRequest: DeserializeOwned + WithId + Send + 'static;
    type Response: Serialize + Send + 'static;

    async fn create(&self, request: Self::CreateRequest) -> Result<Self::Response, AppError>;

    async fn update(&self, request: Self::UpdateRequest) -> Result<Self::Response, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Self::Response, AppError>;

    async fn find_all(&self) -> Result<Vec<Self::Response>, AppError>;
}

/// Translate the store's "no rows" into `NotFound("<Resource> not found")`.
fn not_found<E: Entity>(err: AppError) -> AppError {
    if err.is_row_not_found() {
        AppError::NotFound(format!("{} not found", E::NAME))
    } else {
        err
    }
}

async fn load<E: Entity>(repository: &dyn Repository<E>, id: i64) -> Result<E, AppError> {
    repository.find_by_id(id).await.map_err(not_found::<E>)
}

/// Load then delete. Not atomic: a concurrent delete between the two calls is a no-op.
async fn remove<E: Entity>(repository: &dyn Repository<E>, id: i64) -> Result<(), AppError> {
    let entity = load(repository, id).await?;
    repository.delete(&entity).await?;
    tracing::info!(resource = E::NAME, id, "deleted");
    Ok(())
}

async fn list<E, R>(repository: &dyn Repository<E>) -> Result<Vec<R>, AppError>
where
    E: Entity,
    R: From<E>,
{
    let rows = repository.find_all().await?;
    Ok(to_responses(rows))
}
