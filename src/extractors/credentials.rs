//! Extract the presented credential from `X-API-Key` or `Authorization: Bearer`.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderValue},
};

pub const API_KEY_HEADER: &str = "X-API-Key";
const AUTHORIZATION_HEADER: &str = "Authorization";

/// Credential presented by the caller, if any. `X-API-Key` takes precedence.
#[derive(Clone, Debug)]
pub struct Credentials(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &'static str| {
            parts
                .headers
                .get(name)
                .and_then(|v: &HeaderValue| v.to_str().ok())
                .map(str::trim)
        };
        let value = header(API_KEY_HEADER)
            .filter(|s| !s.is_empty())
            .or_else(|| header(AUTHORIZATION_HEADER).and_then(|s| s.strip_prefix("Bearer ")))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(Credentials(value))
    }
}
