use std::time::Duration;

use axum::{
    http::{header, HeaderValue, StatusCode},
    routing::get,
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        health::livez,
        items::{list_items, preflight, save_item},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Handlers attach their own CORS headers through the response envelope. The
/// outermost layer adds `Access-Control-Allow-Origin: *` to responses that
/// never reach a handler (405, 408, 413).
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/items",
            get(list_items).post(save_item).options(preflight),
        )
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .with_state(state)
}
