//! Entity to wire-response mapping. Total and side-effect free.

use crate::model::domain::{Category, Customer, Employee, Product};
use crate::model::web::{CategoryResponse, CustomerResponse, EmployeeResponse, ProductResponse};

/// Map a list of entities, preserving order. No rows maps to an empty list.
pub fn to_responses<E, R: From<E>>(entities: Vec<E>) -> Vec<R> {
    entities.into_iter().map(R::from).collect()
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.id,
            name: category.name,
        }
    }
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        CustomerResponse {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            phone_number: customer.phone_number,
            address: customer.address,
            loyalty_pts: customer.loyalty_pts,
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        EmployeeResponse {
            id: employee.id,
            name: employee.name,
            role: employee.role,
            email: employee.email,
            phone_number: employee.phone_number,
            date_hired: employee.date_hired,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock_qty: product.stock_qty,
            category_id: product.category_id,
            sku: product.sku,
            tax_rate: product.tax_rate,
        }
    }
}
