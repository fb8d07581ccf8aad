//! hotel-access server entry point.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use hotel_access::adapters::auth::{JwtConfig, JwtSessionValidator};
use hotel_access::adapters::http::{build_router, AuthState, HotelsAppState};
use hotel_access::adapters::postgres::{
    self, PostgresAttendanceReader, PostgresHotelReader, PostgresLoginSessionReader,
};
use hotel_access::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server)?;

    let addr = config.server.socket_addr()?;
    tracing::info!(
        environment = ?config.server.environment,
        require_session = config.auth.require_session,
        "Starting hotel-access"
    );

    let pool = postgres::connect(&config.database).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to connect to database");
        e
    })?;
    tracing::info!(
        max_connections = config.database.max_connections,
        "Database pool ready"
    );

    let mut validator = JwtSessionValidator::new(JwtConfig {
        secret: config.auth.jwt_secret.clone(),
    });
    if config.auth.require_session {
        validator =
            validator.with_session_reader(Arc::new(PostgresLoginSessionReader::new(pool.clone())));
    }
    let validator: AuthState = Arc::new(validator);

    let state = HotelsAppState::new(
        Arc::new(PostgresAttendanceReader::new(pool.clone())),
        Arc::new(PostgresHotelReader::new(pool.clone())),
    );
    let app = build_router(state, validator, &config.server);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Shut down");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured filter.
fn init_tracing(server: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&server.log_level))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    if server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()?;
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
