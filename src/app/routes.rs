use crate::app::error::{middleware_error, panic_response};
use crate::app::handlers::{self, AppState};
use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{BoxError, Router};
use std::time::Duration;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub const CALCULATE_PATH: &str = "/api/calculate";
pub const HEALTH_PATH: &str = "/health";

/// A submission is a handful of short strings.
pub const BODY_LIMIT_BYTES: usize = 16 * 1024;

pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let routes = Router::new()
        .route(CALCULATE_PATH, post(handlers::calculate))
        .route(HEALTH_PATH, get(handlers::health))
        .with_state(state);

    with_service_layers(routes, request_timeout)
}

/// Body limit, panic recovery, timeout and request tracing. Every failure
/// these produce is answered with the `{success:false,message}` envelope.
pub fn with_service_layers(routes: Router, request_timeout: Duration) -> Router {
    routes
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    middleware_error(err, request_timeout)
                }))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(TraceLayer::new_for_http())
}
