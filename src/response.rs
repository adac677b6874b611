//! Standard response envelope: `{code, status, data}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct WebResponse<T> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

impl<T> WebResponse<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        WebResponse {
            code: status.as_u16(),
            status: status.canonical_reason().unwrap_or("Unknown").to_string(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for WebResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

pub fn success_ok<T: Serialize>(data: T) -> WebResponse<T> {
    WebResponse::new(StatusCode::OK, data)
}

pub fn success_created<T: Serialize>(data: T) -> WebResponse<T> {
    WebResponse::new(StatusCode::CREATED, data)
}
