use super::{list, load, remove, CrudService, Validator};
use crate::error::AppError;
use crate::model::{Customer, CustomerCreateRequest, CustomerResponse, CustomerUpdateRequest};
use crate::repository::Repository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct CustomerService {
    repository: Arc<dyn Repository<Customer>>,
    validator: Arc<Validator>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn Repository<Customer>>, validator: Arc<Validator>) -> Self {
        CustomerService {
            repository,
            validator,
        }
    }
}

#[async_trait]
impl CrudService for CustomerService {
    type CreateRequest = CustomerCreateRequest;
    type UpdateRequest = CustomerUpdateRequest;
    type Response = CustomerResponse;

    async fn create(&self, request: CustomerCreateRequest) -> Result<CustomerResponse, AppError> {
        self.validator.validate(&request)?;
        let customer = Customer {
            id: 0,
            name: request.name,
            email: request.email,
            phone_number: request.phone_number,
            address: request.address,
            loyalty_pts: request.loyalty_pts.unwrap_or_default(),
        };
        let saved = self.repository.save(customer).await?;
        tracing::info!(id = saved.id, "customer created");
        Ok(saved.into())
    }

    /// Replaces every mutable field of the stored customer.
    async fn update(&self, request: CustomerUpdateRequest) -> Result<CustomerResponse, AppError> {
        self.validator.validate(&request)?;
        let mut customer = load(self.repository.as_ref(), request.id).await?;
        customer.name = request.name;
        customer.email = request.email;
        customer.phone_number = request.phone_number;
        customer.address = request.address;
        customer.loyalty_pts = request.loyalty_pts.unwrap_or_default();
        let updated = self.repository.update(customer).await?;
        tracing::info!(id = updated.id, "customer updated");
        Ok(updated.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        remove(self.repository.as_ref(), id).await
    }

    async fn find_by_id(&self, id: i64) -> Result<CustomerResponse, AppError> {
        Ok(load(self.repository.as_ref(), id).await?.into())
    }

    async fn find_all(&self) -> Result<Vec<CustomerResponse>, AppError> {
        list(self.repository.as_ref()).await
    }
}
