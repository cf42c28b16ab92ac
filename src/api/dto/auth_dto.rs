//! 认证 DTO

use serde::{Deserialize, Serialize};

/// 授权跳转地址响应
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginUrlResponse {
    /// Discord 授权页地址
    pub url: String,
}

/// OAuth 回调请求
#[derive(Debug, Deserialize)]
pub struct AuthCallbackRequest {
    /// 授权码
    pub code: String,
}

/// OAuth 回调响应
///
/// 基础实现直接把 Discord 的访问令牌当会话令牌返回；
/// 真实部署可以在这里签发自己的会话 JWT。
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// 访问令牌
    pub access_token: String,
    /// Discord 用户档案
    pub user: serde_json::Value,
}
