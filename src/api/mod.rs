//! API 模块
//!
//! 提供 REST API 支持。

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

use axum::Router;
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api::app_state::AppState;
use crate::api::middleware::security_headers_middleware;
use crate::config::config::CorsConfig;

pub fn create_router(app_state: AppState, cors: &CorsConfig) -> Router {
    let api = Router::new()
        .merge(routes::lorebook_routes::create_lorebook_router())
        .merge(routes::auth_routes::create_auth_router());

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors_layer = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", api)
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(cors_layer)
        .with_state(app_state)
}
