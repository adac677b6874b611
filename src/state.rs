//! Services shared by all resource routes. Built once and injected, never global.

use crate::repository::{
    PgCategoryRepository, PgCustomerRepository, PgEmployeeRepository, PgProductRepository,
};
use crate::service::{CategoryService, CustomerService, EmployeeService, ProductService, Validator};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CategoryService>,
    pub customers: Arc<CustomerService>,
    pub employees: Arc<EmployeeService>,
    pub products: Arc<ProductService>,
}

impl AppState {
    /// Wire every service to its PostgreSQL gateway over one pool and one validator.
    pub fn from_pool(pool: PgPool, validator: Arc<Validator>) -> Self {
        AppState {
            categories: Arc::new(CategoryService::new(
                Arc::new(PgCategoryRepository::new(pool.clone())),
                validator.clone(),
            )),
            customers: Arc::new(CustomerService::new(
                Arc::new(PgCustomerRepository::new(pool.clone())),
                validator.clone(),
            )),
            employees: Arc::new(EmployeeService::new(
                Arc::new(PgEmployeeRepository::new(pool.clone())),
                validator.clone(),
            )),
            products: Arc::new(ProductService::new(
                Arc::new(PgProductRepository::new(pool)),
                validator,
            )),
        }
    }
}
