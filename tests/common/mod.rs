//! Shared test fixtures: an in-memory gateway that records calls and can be told to fail.

#![allow(dead_code, clippy::unwrap_used)]

use async_trait::async_trait;
use retail_api::model::{Category, Customer, Employee, Entity, Product};
use retail_api::repository::Repository;
use retail_api::service::{CategoryService, CustomerService, EmployeeService, ProductService};
use retail_api::{AppError, AppState, Validator};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "test-key";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Save,
    Update,
    Delete,
    FindById,
    FindAll,
}

pub struct MemoryRepository<E> {
    rows: Mutex<Vec<E>>,
    next_id: Mutex<i64>,
    calls: Mutex<HashMap<Op, usize>>,
    failing: Mutex<HashSet<Op>>,
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new() -> Arc<Self> {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<E>) -> Arc<Self> {
        let next_id = rows.iter().map(Entity::id).max().unwrap_or(0) + 1;
        Arc::new(MemoryRepository {
            rows: Mutex::new(rows),
            next_id: Mutex::new(next_id),
            calls: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
        })
    }

    /// Make every later call of `op` fail with a store error.
    pub fn fail_on(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn calls(&self, op: Op) -> usize {
        self.calls.lock().unwrap().get(&op).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn writes(&self) -> usize {
        self.calls(Op::Save) + self.calls(Op::Update) + self.calls(Op::Delete)
    }

    pub fn rows(&self) -> Vec<E> {
        self.rows.lock().unwrap().clone()
    }

    fn enter(&self, op: Op) -> Result<(), AppError> {
        *self.calls.lock().unwrap().entry(op).or_insert(0) += 1;
        if self.failing.lock().unwrap().contains(&op) {
            return Err(AppError::Db(sqlx::Error::Protocol(format!("{:?} failed", op))));
        }
        Ok(())
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn save(&self, mut entity: E) -> Result<E, AppError> {
        self.enter(Op::Save)?;
        let mut next_id = self.next_id.lock().unwrap();
        entity.set_id(*next_id);
        *next_id += 1;
        self.rows.lock().unwrap().push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, AppError> {
        self.enter(Op::Update)?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id() == entity.id()) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity)
            }
            None => Err(AppError::Persistence(format!("{} no longer exists", entity.id()))),
        }
    }

    async fn delete(&self, entity: &E) -> Result<(), AppError> {
        self.enter(Op::Delete)?;
        self.rows.lock().unwrap().retain(|r| r.id() != entity.id());
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<E, AppError> {
        self.enter(Op::FindById)?;
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    async fn find_all(&self) -> Result<Vec<E>, AppError> {
        self.enter(Op::FindAll)?;
        Ok(self.rows.lock().unwrap().clone())
    }
}

pub fn validator() -> Arc<Validator> {
    Arc::new(Validator::new().unwrap())
}

pub struct Repos {
    pub categories: Arc<MemoryRepository<Category>>,
    pub customers: Arc<MemoryRepository<Customer>>,
    pub employees: Arc<MemoryRepository<Employee>>,
    pub products: Arc<MemoryRepository<Product>>,
}

impl Repos {
    pub fn empty() -> Self {
        Repos {
            categories: MemoryRepository::new(),
            customers: MemoryRepository::new(),
            employees: MemoryRepository::new(),
            products: MemoryRepository::new(),
        }
    }

    pub fn state(&self) -> AppState {
        let validator = validator();
        AppState {
            categories: Arc::new(CategoryService::new(self.categories.clone(), validator.clone())),
            customers: Arc::new(CustomerService::new(self.customers.clone(), validator.clone())),
            employees: Arc::new(EmployeeService::new(self.employees.clone(), validator.clone())),
            products: Arc::new(ProductService::new(self.products.clone(), validator)),
        }
    }
}

pub fn harun() -> Customer {
    Customer {
        id: 1,
        name: "Harun maskiu".into(),
        email: "gone@away.com".into(),
        phone_number: "72346782364".into(),
        address: "Can't touch this".into(),
        loyalty_pts: 100,
    }
}

pub fn beverages() -> Category {
    Category {
        id: 1,
        name: "Hot beverages".into(),
    }
}

pub fn cashier() -> Employee {
    Employee {
        id: 1,
        name: "Siti Rahmawati".into(),
        role: "Cashier".into(),
        email: "siti@shop.example".into(),
        phone_number: "081234567890".into(),
        date_hired: "2023-04-01".into(),
    }
}

pub fn espresso() -> Product {
    Product {
        id: 1,
        name: "Espresso beans".into(),
        description: "Dark roast, 1kg bag".into(),
        price: 18.5,
        stock_qty: 40,
        category_id: 1,
        sku: "ESP-1KG".into(),
        tax_rate: 11.0,
    }
}
