//! HTTP adapters - REST API implementations.
//!
//! `build_router` assembles the full service: hotel routes behind the auth
//! middleware, an unauthenticated health check, and the tower-http stack.

pub mod error;
pub mod hotels;
pub mod middleware;

pub use error::ErrorResponse;
pub use hotels::{hotels_router, HotelApiError, HotelsAppState};
pub use middleware::{auth_middleware, AuthState, RequireAuth};

use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use crate::config::ServerConfig;

/// Builds the application router.
pub fn build_router(state: HotelsAppState, validator: AuthState, server: &ServerConfig) -> Router {
    let hotels = hotels_router()
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(validator, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .merge(hotels)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}

/// GET /health - Liveness check
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Any origin when none are configured, otherwise exactly the configured list.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let configured = server.cors_origins_list();
    if configured.is_empty() {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(origins)
}
