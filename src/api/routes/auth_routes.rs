//! Auth Routes
//!
//! 定义 Discord OAuth 相关的 API 路由。

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;
use crate::api::handlers::auth_handler::*;

/// 创建认证路由器
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/auth/login/discord", get(login_discord))
        .route("/auth/callback/discord", post(callback_discord))
}
