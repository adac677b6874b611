//! Retail API: layered CRUD REST service for categories, customers, employees and products.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use auth::ApiKeys;
pub use config::AppConfig;
pub use error::{AppError, ConfigError, FieldError};
pub use migration::apply_migrations;
pub use response::{success_created, success_ok, WebResponse};
pub use routes::{api_routes, app_router, common_routes, common_routes_with_ready};
pub use service::{CrudService, Validator};
pub use state::AppState;
pub use store::ensure_database_exists;
