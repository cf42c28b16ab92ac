use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::auth_dto::*},
    error::AppError,
};

/// 返回 Discord 授权跳转地址
pub async fn login_discord(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let url = state.auth.auth_url()?;
    Ok(Json(LoginUrlResponse { url }))
}

/// 用授权码换取 Discord 令牌和基础用户信息
pub async fn callback_discord(
    State(state): State<AppState>,
    Json(request): Json<AuthCallbackRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Exchanging Discord authorization code");

    let token = state.auth.exchange_code(&request.code).await?;
    let user = state.auth.fetch_user(&token.access_token).await?;

    Ok(Json(AuthResponse {
        access_token: token.access_token,
        user,
    }))
}
