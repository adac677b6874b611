use super::{list, load, remove, CrudService, Validator};
use crate::error::AppError;
use crate::model::{Product, ProductCreateRequest, ProductResponse, ProductUpdateRequest};
use crate::repository::Repository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct ProductService {
    repository: Arc<dyn Repository<Product>>,
    validator: Arc<Validator>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn Repository<Product>>, validator: Arc<Validator>) -> Self {
        ProductService {
            repository,
            validator,
        }
    }
}

#[async_trait]
impl CrudService for ProductService {
    type CreateRequest = ProductCreateRequest;
    type UpdateRequest = ProductUpdateRequest;
    type Response = ProductResponse;

    async fn create(&self, request: ProductCreateRequest) -> Result<ProductResponse, AppError> {
        self.validator.validate(&request)?;
        let product = Product {
            id: 0,
            name: request.name,
            description: request.description,
            price: request.price.unwrap_or_default(),
            stock_qty: request.stock_qty.unwrap_or_default(),
            category_id: request.category_id.unwrap_or_default(),
            sku: request.sku,
            tax_rate: request.tax_rate.unwrap_or_default(),
        };
        let saved = self.repository.save(product).await?;
        tracing::info!(id = saved.id, category_id = saved.category_id, "product created");
        Ok(saved.into())
    }

    async fn update(&self, request: ProductUpdateRequest) -> Result<ProductResponse, AppError> {
        self.validator.validate(&request)?;
        let mut product = load(self.repository.as_ref(), request.id).await?;
        product.name = request.name;
        product.description = request.description;
        product.price = request.price.unwrap_or_default();
        product.stock_qty = request.stock_qty.unwrap_or_default();
        product.category_id = request.category_id.unwrap_or_default();
        product.sku = request.sku;
        product.tax_rate = request.tax_rate.unwrap_or_default();
        let updated = self.repository.update(product).await?;
        tracing::info!(id = updated.id, "product updated");
        Ok(updated.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        remove(self.repository.as_ref(), id).await
    }

    async fn find_by_id(&self, id: i64) -> Result<ProductResponse, AppError> {
        Ok(load(self.repository.as_ref(), id).await?.into())
    }

    async fn find_all(&self) -> Result<Vec<ProductResponse>, AppError> {
        list(self.repository.as_ref()).await
    }
}
