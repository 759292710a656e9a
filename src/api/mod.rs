//! HTTP surface wiring: parse, validate, dispatch, shape.

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::engine::ExecutionEngine;
use handlers::AppState;

/// Build the API router around the configured engine.
///
/// The surrounding system owns the listener, runtime, and engine lifetime;
/// this crate only owns the routes and what flows through them.
pub fn app(engine: Arc<dyn ExecutionEngine>) -> Router {
    let state = Arc::new(AppState { engine });

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/v1/convert/source", post(handlers::convert_source))
        .route("/v1/chunk", post(handlers::chunk_source))
        .route("/v1/clear", get(handlers::clear_results))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
