//! Persisted representation of the four resources. Identity is assigned by the store.

use sqlx::FromRow;

/// A row owned by one of the resource tables.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human name used in not-found messages and logs, e.g. "Customer".
    const NAME: &'static str;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);
}

#[derive(Clone, Debug, Default, PartialEq, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub loyalty_pts: i32,
}

#[derive(Clone, Debug, Default, PartialEq, FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    /// e.g. Cashier, Manager
    pub role: String,
    pub email: String,
    pub phone_number: String,
    /// Free text; no calendar validation is applied.
    pub date_hired: String,
}

#[derive(Clone, Debug, Default, PartialEq, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_qty: i32,
    /// Must reference an existing category; enforced by a foreign key.
    pub category_id: i64,
    pub sku: String,
    pub tax_rate: f64,
}

macro_rules! impl_entity {
    ($ty:ty, $name:literal) => {
        impl Entity for $ty {
            const NAME: &'static str = $name;

            fn id(&self) -> i64 {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = id;
            }
        }
    };
}

impl_entity!(Category, "Category");
impl_entity!(Customer, "Customer");
impl_entity!(Employee, "Employee");
impl_entity!(Product, "Product");
