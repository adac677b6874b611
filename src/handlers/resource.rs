//! Resource CRUD handlers, generic over any [`CrudService`].
//! Extraction failures are reported through the same envelope as service errors.

use crate::error::AppError;
use crate::model::WithId;
use crate::response::{success_created, success_ok, WebResponse};
use crate::service::CrudService;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

fn parse_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|e| AppError::BadRequest(format!("invalid id: {}", e.body_text())))
}

fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(e.body_text())
        } else {
            AppError::BadRequest(e.body_text())
        }
    })
}

pub async fn find_all<S: CrudService>(
    State(service): State<Arc<S>>,
) -> Result<WebResponse<Vec<S::Response>>, AppError> {
    let rows = service.find_all().await?;
    Ok(success_ok(rows))
}

pub async fn create<S: CrudService>(
    State(service): State<Arc<S>>,
    payload: Result<Json<S::CreateRequest>, JsonRejection>,
) -> Result<WebResponse<S::Response>, AppError> {
    let request = parse_body(payload)?;
    let row = service.create(request).await?;
    Ok(success_created(row))
}

pub async fn find_by_id<S: CrudService>(
    State(service): State<Arc<S>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<WebResponse<S::Response>, AppError> {
    let id = parse_id(path)?;
    let row = service.find_by_id(id).await?;
    Ok(success_ok(row))
}

/// The path id wins over any `id` in the body.
pub async fn update<S: CrudService>(
    State(service): State<Arc<S>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<S::UpdateRequest>, JsonRejection>,
) -> Result<WebResponse<S::Response>, AppError> {
    let id = parse_id(path)?;
    let request = parse_body(payload)?.with_id(id);
    let row = service.update(request).await?;
    Ok(success_ok(row))
}

pub async fn delete<S: CrudService>(
    State(service): State<Arc<S>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<WebResponse<()>, AppError> {
    let id = parse_id(path)?;
    service.delete(id).await?;
    Ok(success_ok(()))
}
