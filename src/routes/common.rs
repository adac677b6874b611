//! Operational routes outside `/api`: liveness, readiness, build info.
//! Bodies use the same envelope as the resource routes.

use crate::migration::managed_tables;
use crate::response::{success_ok, WebResponse};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

#[derive(Serialize)]
struct Readiness {
    database: bool,
    /// Resource tables missing from the connected database.
    missing_tables: Vec<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn health() -> WebResponse<Liveness> {
    success_ok(Liveness { status: "ok" })
}

async fn version() -> WebResponse<BuildInfo> {
    success_ok(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Ready once the pool answers and every resource table exists.
async fn ready(State(pool): State<PgPool>) -> WebResponse<Readiness> {
    let mut missing_tables = Vec::new();
    for table in managed_tables() {
        let found = sqlx::query_scalar::<_, bool>("SELECT to_regclass($1) IS NOT NULL")
            .bind(table)
            .fetch_one(&pool)
            .await;
        match found {
            Ok(true) => {}
            Ok(false) => missing_tables.push(table),
            Err(e) => {
                tracing::warn!(error = %e, "readiness check failed");
                return WebResponse::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    Readiness {
                        database: false,
                        missing_tables: managed_tables().collect(),
                    },
                );
            }
        }
    }
    let status = if missing_tables.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    WebResponse::new(
        status,
        Readiness {
            database: true,
            missing_tables,
        },
    )
}

/// GET /health, GET /version. No database needed.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}

/// Common routes plus GET /ready, which checks the pool and the schema.
pub fn common_routes_with_ready(pool: PgPool) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(pool)
        .merge(common_routes())
}
