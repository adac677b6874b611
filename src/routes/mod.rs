//! Router assembly: gated resource routes under `/api`, ungated common routes.

mod common;
mod resource;

pub use common::{common_routes, common_routes_with_ready};
pub use resource::{api_routes, resource_routes};

use crate::auth::ApiKeys;
use crate::response::WebResponse;
use crate::state::AppState;
use axum::{
    body::to_bytes,
    http::header::{ALLOW, CONTENT_TYPE},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Upper bound on a framework-generated error body read back for re-rendering.
const BARE_ERROR_BODY_LIMIT: usize = 4096;

/// Full application: `common` merged at the root, resources nested under `/api`.
pub fn app_router(state: AppState, keys: ApiKeys, common: Router, body_limit: usize) -> Router {
    Router::new()
        .merge(common)
        .nest("/api", api_routes(state, keys))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(middleware::map_response(envelope_bare_errors))
        .layer(TraceLayer::new_for_http())
}

/// Error responses produced outside the handlers (unknown route, wrong method,
/// body limit) carry plain text or nothing. Re-render them as an envelope.
async fn envelope_bare_errors(response: Response) -> Response {
    let status = response.status();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json || !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, BARE_ERROR_BODY_LIMIT)
        .await
        .unwrap_or_default();
    let text = String::from_utf8_lossy(&bytes).trim().to_string();
    let data = if text.is_empty() {
        status.canonical_reason().unwrap_or("error").to_lowercase()
    } else {
        text
    };
    let mut rendered = WebResponse::new(status, data).into_response();
    if let Some(allow) = parts.headers.get(ALLOW) {
        rendered.headers_mut().insert(ALLOW, allow.clone());
    }
    rendered
}
