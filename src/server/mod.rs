use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::get, routing::post};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use crate::server::handlers::{server_status_handler, upload_file_handler};
use crate::server::types::AppState;
use crate::utils::constants::SERVER_REQUEST_BODY_LIMIT;

pub mod handlers;
pub mod types;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let timeout = TimeoutLayer::new(Duration::from_secs(60));
    let request_body_limit = RequestBodyLimitLayer::new(SERVER_REQUEST_BODY_LIMIT);

    Router::new()
        .route("/", get(server_status_handler))
        .route("/upload", post(upload_file_handler))
        .layer(timeout)
        .layer(cors)
        .layer(request_body_limit)
        .layer(DefaultBodyLimit::max(SERVER_REQUEST_BODY_LIMIT))
        .with_state(state)
}
