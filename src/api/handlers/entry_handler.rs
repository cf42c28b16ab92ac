use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{api::app_state::AppState, error::AppError, models::entry::EntryPayload};

/// 追加词条；客户端没给 UID 时由后端铸造
pub async fn add_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EntryPayload>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Adding entry to lorebook: {}", id);

    let mut store = state.store.write().await;
    let result = store.add_entry(&id, payload)?;

    Ok((StatusCode::CREATED, Json(result)))
}

/// 按 UID 整体替换词条
pub async fn update_entry(
    State(state): State<AppState>,
    Path((id, uid)): Path<(String, i64)>,
    Json(payload): Json<EntryPayload>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating entry {} in lorebook: {}", uid, id);

    let mut store = state.store.write().await;
    let result = store.update_entry(&id, uid, payload)?;

    Ok(Json(result))
}

/// 删除词条并返回最新元数据，客户端据此同步计数和时间戳
pub async fn delete_entry(
    State(state): State<AppState>,
    Path((id, uid)): Path<(String, i64)>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting entry {} from lorebook: {}", uid, id);

    let mut store = state.store.write().await;
    let result = store.delete_entry(&id, uid)?;

    Ok(Json(result))
}
