use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::lorebook_dto::*},
    error::AppError,
};

/// 图书馆列表：每本传说书一条轻量元数据
pub async fn list_lorebooks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.store.read().await;
    Ok(Json(store.list_library()))
}

/// 取完整传说书（元数据 + 词条）
pub async fn get_lorebook(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Fetching lorebook: {}", id);

    let store = state.store.read().await;
    let book = store.get_lorebook(&id)?;

    Ok(Json(book))
}

pub async fn create_lorebook(
    State(state): State<AppState>,
    Json(request): Json<CreateLorebookRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating lorebook: {:?}", request.name);

    let mut store = state.store.write().await;
    let book = store.create_lorebook(&request.name, request.entries);

    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn rename_lorebook(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RenameLorebookRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Renaming lorebook {} to {:?}", id, request.name);

    let mut store = state.store.write().await;
    let meta = store.rename_lorebook(&id, &request.name)?;

    Ok(Json(meta))
}

pub async fn delete_lorebook(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting lorebook: {}", id);

    let mut store = state.store.write().await;
    store.delete_lorebook(&id)?;

    Ok(Json(DeleteLorebookResponse::deleted()))
}

/// 取最近打开的传说书 ID（恢复会话用）
pub async fn get_active_lorebook(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store.read().await;

    Ok(Json(ActiveLorebookResponse {
        active_id: store.active().map(str::to_string),
    }))
}

pub async fn set_active_lorebook(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Setting active lorebook: {}", id);

    let mut store = state.store.write().await;
    let active_id = store.set_active(&id)?;

    Ok(Json(ActiveLorebookResponse {
        active_id: Some(active_id),
    }))
}

pub async fn clear_active_lorebook(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Clearing active lorebook");

    let mut store = state.store.write().await;
    store.clear_active();

    Ok(Json(ActiveLorebookResponse { active_id: None }))
}
