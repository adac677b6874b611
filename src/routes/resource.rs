//! Resource CRUD routes. Each resource gets the same five endpoints.

use crate::auth::{require_api_key, ApiKeys};
use crate::handlers::resource::{create, delete, find_all, find_by_id, update};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;

/// `GET|POST /{segment}` and `GET|PUT|DELETE /{segment}/:id`.
pub fn resource_routes<S: CrudService>(segment: &str, service: Arc<S>) -> Router {
    Router::new()
        .route(&format!("/{}", segment), get(find_all::<S>).post(create::<S>))
        .route(
            &format!("/{}/:id", segment),
            get(find_by_id::<S>).put(update::<S>).delete(delete::<S>),
        )
        .with_state(service)
}

/// All four resources behind the access gate. Unmatched paths are not gated.
pub fn api_routes(state: AppState, keys: ApiKeys) -> Router {
    Router::new()
        .merge(resource_routes("categories", state.categories))
        .merge(resource_routes("customers", state.customers))
        .merge(resource_routes("products", state.products))
        .merge(resource_routes("employees", state.employees))
        .route_layer(middleware::from_fn_with_state(keys, require_api_key))
}
