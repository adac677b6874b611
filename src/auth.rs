//! Access gate: every `/api` request must present one of the configured keys.

use crate::error::AppError;
use crate::extractors::credentials::Credentials;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct ApiKeys {
    keys: Arc<HashSet<String>>,
}

impl ApiKeys {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        ApiKeys {
            keys: Arc::new(keys.into_iter().map(Into::into).collect()),
        }
    }

    pub fn accepts(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

/// Middleware for `axum::middleware::from_fn_with_state`.
pub async fn require_api_key(
    State(keys): State<ApiKeys>,
    Credentials(presented): Credentials,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match presented {
        Some(key) if keys.accepts(&key) => Ok(next.run(request).await),
        _ => {
            tracing::warn!(path = %request.uri().path(), "rejected request without valid credentials");
            Err(AppError::Unauthorized)
        }
    }
}
