//! Retail API server: loads settings, prepares the database, wires services, serves `/api`.
//!
//! Run from repo root: `cargo run -p retail-server`

use retail_api::{
    app_router, apply_migrations, common_routes_with_ready, ensure_database_exists,
    telemetry::init_tracing, ApiKeys, AppConfig, AppState, Validator,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing();

    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    apply_migrations(&pool).await?;

    let validator = Arc::new(Validator::new()?);
    let state = AppState::from_pool(pool.clone(), validator);
    let keys = ApiKeys::new(config.api_keys.iter().cloned());
    let app = app_router(
        state,
        keys,
        common_routes_with_ready(pool),
        config.body_limit_bytes,
    );

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
