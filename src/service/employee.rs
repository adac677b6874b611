use super::{list, load, remove, CrudService, Validator};
use crate::error::AppError;
use crate::model::{Employee, EmployeeCreateRequest, EmployeeResponse, EmployeeUpdateRequest};
use crate::repository::Repository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct EmployeeService {
    repository: Arc<dyn Repository<Employee>>,
    validator: Arc<Validator>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn Repository<Employee>>, validator: Arc<Validator>) -> Self {
        EmployeeService {
            repository,
            validator,
        }
    }
}

#[async_trait]
impl CrudService for EmployeeService {
    type CreateRequest = EmployeeCreateRequest;
    type UpdateRequest = EmployeeUpdateRequest;
    type Response = EmployeeResponse;

    async fn create(&self, request: EmployeeCreateRequest) -> Result<EmployeeResponse, AppError> {
        self.validator.validate(&request)?;
        let employee = Employee {
            id: 0,
            name: request.name,
            role: request.role,
            email: request.email,
            phone_number: request.phone_number,
            date_hired: request.date_hired,
        };
        let saved = self.repository.save(employee).await?;
        tracing::info!(id = saved.id, "employee created");
        Ok(saved.into())
    }

    async fn update(&self, request: EmployeeUpdateRequest) -> Result<EmployeeResponse, AppError> {
        self.validator.validate(&request)?;
        let mut employee = load(self.repository.as_ref(), request.id).await?;
        employee.name = request.name;
        employee.role = request.role;
        employee.email = request.email;
        employee.phone_number = request.phone_number;
        employee.date_hired = request.date_hired;
        let updated = self.repository.update(employee).await?;
        tracing::info!(id = updated.id, "employee updated");
        Ok(updated.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        remove(self.repository.as_ref(), id).await
    }

    async fn find_by_id(&self, id: i64) -> Result<EmployeeResponse, AppError> {
        Ok(load(self.repository.as_ref(), id).await?.into())
    }

    async fn find_all(&self) -> Result<Vec<EmployeeResponse>, AppError> {
        list(self.repository.as_ref()).await
    }
}
