//! Wire shapes exchanged over HTTP and their field rules.
//!
//! Create requests never carry an identity. Update requests carry the full
//! attribute set; the identity is overwritten from the request path.

use crate::service::validation::{Checks, Validate};
use serde::{Deserialize, Serialize};

/// Update requests whose identity is taken from the path.
pub trait WithId {
    fn with_id(self, id: i64) -> Self;
}

macro_rules! impl_with_id {
    ($($ty:ty),+) => {
        $(impl WithId for $ty {
            fn with_id(mut self, id: i64) -> Self {
                self.id = id;
                self
            }
        })+
    };
}

// Category

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CategoryCreateRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CategoryUpdateRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

impl Validate for CategoryCreateRequest {
    fn validate(&self, checks: &mut Checks<'_>) {
        checks.length("name", &self.name, 10, 32);
    }
}

impl Validate for CategoryUpdateRequest {
    fn validate(&self, checks: &mut Checks<'_>) {
        checks
            .at_least("id", Some(self.id), 1)
            .length("name", &self.name, 10, 32);
    }
}

// Customer

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CustomerCreateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub loyalty_pts: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CustomerUpdateRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub loyalty_pts: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub loyalty_pts: i32,
}

fn check_customer(
    checks: &mut Checks<'_>,
    name: &str,
    email: &str,
    phone_number: &str,
    address: &str,
    loyalty_pts: Option<i32>,
) {
    checks
        .length("name", name, 10, 32)
        .email("email", email)
        .length("phone_number", phone_number, 10, 30)
        .length("address", address, 10, 255)
        .present("loyalty_pts", loyalty_pts);
}

impl Validate for CustomerCreateRequest {
    fn validate(&self, checks: &mut Checks<'_>) {
        check_customer(
            checks,
            &self.name,
            &self.email,
            &self.phone_number,
            &self.address,
            self.loyalty_pts,
        );
    }
}

impl Validate for CustomerUpdateRequest {
    fn validate(&self, checks: &mut Checks<'_>) {
        checks.at_least("id", Some(self.id), 1);
        check_customer(
            checks,
            &self.name,
            &self.email,
            &self.phone_number,
            &self.address,
            self.loyalty_pts,
        );
    }
}

// Employee

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EmployeeCreateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub date_hired: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EmployeeUpdateRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub date_hired: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone_number: String,
    pub date_hired: String,
}

fn check_employee(
    checks: &mut Checks<'_>,
    name: &str,
    role: &str,
    email: &str,
    phone_number: &str,
    date_hired: &str,
) {
    checks
        .length("name", name, 10, 32)
        .length("role", role, 3, 32)
        .email("email", email)
        .length("phone_number", phone_number, 10, 30)
        .length("date_hired", date_hired, 6, 30);
}

impl Validate for EmployeeCreateRequest {
    fn validate(&self, checks: &mut Checks<'_>) {
        check_employee(
            checks,
            &self.name,
            &self.role,
            &self.email,
            &self.phone_number,
            &self.date_hired,
        );
    }
}

impl Validate for EmployeeUpdateRequest {
    fn validate(&self, checks: &mut Checks<'_>) {
        checks.at_least("id", Some(self.id), 1);
        check_employee(
            checks,
            &self.name,
            &self.role,
            &self.email,
            &self.phone_number,
            &self.date_hired,
        );
    }
}

// Product

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductCreateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock_qty: Option<i32>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub tax_rate: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductUpdateRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock_qty: Option<i32>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub tax_rate: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_qty: i32,
    pub category_id: i64,
    pub sku: String,
    pub tax_rate: f64,
}

impl Validate for ProductCreateRequest {
    fn validate(&self, checks: &mut Checks<'_>) {
        checks
            .length("name", &self.name, 10, 32)
            .length("description", &self.description, 1, 255)
            .greater_than("price", self.price, 0.0)
            .at_least("stock_qty", self.stock_qty, 0)
            .greater_than("category_id", self.category_id, 0)
            .length("sku", &self.sku, 3, 64)
            .at_least("tax_rate", self.tax_rate, 0.0);
    }
}

impl Validate for ProductUpdateRequest {
    fn validate(&self, checks: &mut Checks<'_>) {
        checks
            .at_least("id", Some(self.id), 1)
            .length("name", &self.name, 10, 32)
            .length("description", &self.description, 1, 255)
            .greater_than("price", self.price, 0.0)
            .at_least("stock_qty", self.stock_qty, 0)
            .greater_than("category_id", self.category_id, 0)
            .length("sku", &self.sku, 3, 64)
            .at_least("tax_rate", self.tax_rate, 0.0);
    }
}

impl_with_id!(
    CategoryUpdateRequest,
    CustomerUpdateRequest,
    EmployeeUpdateRequest,
    ProductUpdateRequest
);
