//! Gateway binary: env settings, lazy Postgres pool, initial route table
//! build (fatal on config error), SIGHUP-driven reload worker, axum server.

use query_gateway::{gateway_routes, reload, AppState, RouteRegistry, Settings};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("query_gateway=info".parse()?))
        .init();
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();

    // Lazy pool: the gateway serves /healthz even when the database is down;
    // requests acquire their own scoped connection and fail individually.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(settings.pg_options());

    let table = reload::build_table(&settings.config_path).await?;
    tracing::info!(
        routes = table.len(),
        config = %settings.config_path.display(),
        "route table built"
    );
    let registry = Arc::new(RouteRegistry::new(table));

    let (trigger_tx, trigger_rx) = mpsc::unbounded_channel();
    #[cfg(unix)]
    reload::spawn_sighup_listener(trigger_tx)?;
    reload::spawn_reload_worker(
        Arc::clone(&registry),
        settings.config_path.clone(),
        trigger_rx,
    );

    let state = AppState { pool, registry };
    let app = gateway_routes(state);

    let listener = TcpListener::bind(("0.0.0.0", settings.listen_port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
