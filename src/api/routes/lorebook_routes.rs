//! Lorebook Routes
//!
//! 定义传说书与词条相关的 API 路由。

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use crate::api::app_state::AppState;
use crate::api::handlers::entry_handler::*;
use crate::api::handlers::lorebook_handler::*;

/// 创建传说书路由器
pub fn create_lorebook_router() -> Router<AppState> {
    Router::new()
        .route("/lorebooks", get(list_lorebooks))
        .route("/lorebooks", post(create_lorebook))
        .route("/lorebooks/:id", get(get_lorebook))
        .route("/lorebooks/:id", patch(rename_lorebook))
        .route("/lorebooks/:id", delete(delete_lorebook))
        .route("/lorebooks/:id/entries", post(add_entry))
        .route("/lorebooks/:id/entries/:uid", put(update_entry))
        .route("/lorebooks/:id/entries/:uid", delete(delete_entry))
        .route("/active-lorebook", get(get_active_lorebook))
        .route("/active-lorebook", delete(clear_active_lorebook))
        .route("/active-lorebook/:id", put(set_active_lorebook))
}
