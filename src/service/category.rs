use super::{list, load, remove, CrudService, Validator};
use crate::error::AppError;
use crate::model::{Category, CategoryCreateRequest, CategoryResponse, CategoryUpdateRequest};
use crate::repository::Repository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct CategoryService {
    repository: Arc<dyn Repository<Category>>,
    validator: Arc<Validator>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn Repository<Category>>, validator: Arc<Validator>) -> Self {
        CategoryService {
            repository,
            validator,
        }
    }
}

#[async_trait]
impl CrudService for CategoryService {
    type CreateRequest = CategoryCreateRequest;
    type UpdateRequest = CategoryUpdateRequest;
    type Response = CategoryResponse;

    async fn create(&self, request: CategoryCreateRequest) -> Result<CategoryResponse, AppError> {
        self.validator.validate(&request)?;
        let category = Category {
            id: 0,
            name: request.name,
        };
        let saved = self.repository.save(category).await?;
        tracing::info!(id = saved.id, "category created");
        Ok(saved.into())
    }

    async fn update(&self, request: CategoryUpdateRequest) -> Result<CategoryResponse, AppError> {
        self.validator.validate(&request)?;
        let mut category = load(self.repository.as_ref(), request.id).await?;
        category.name = request.name;
        let updated = self.repository.update(category).await?;
        tracing::info!(id = updated.id, "category updated");
        Ok(updated.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        remove(self.repository.as_ref(), id).await
    }

    async fn find_by_id(&self, id: i64) -> Result<CategoryResponse, AppError> {
        Ok(load(self.repository.as_ref(), id).await?.into())
    }

    async fn find_all(&self) -> Result<Vec<CategoryResponse>, AppError> {
        list(self.repository.as_ref()).await
    }
}
