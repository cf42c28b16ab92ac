//! 错误处理模块
//!
//! 定义应用程序的错误类型和错误处理逻辑。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 缺失资源的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// 传说书
    Lorebook,
    /// 词条
    Entry,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Lorebook => write!(f, "Lorebook"),
            ResourceKind::Entry => write!(f, "Entry"),
        }
    }
}

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 资源不存在
    #[error("{kind} not found: {id}")]
    NotFound { kind: ResourceKind, id: String },

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 上游身份提供方错误
    #[error("上游身份提供方错误: {0}")]
    Upstream(String),

    /// 内部错误
    #[error("内部错误: {0}")]
    Internal(String),
}

impl AppError {
    /// 传说书不存在
    pub fn lorebook_not_found(id: &str) -> Self {
        AppError::NotFound {
            kind: ResourceKind::Lorebook,
            id: id.to_string(),
        }
    }

    /// 词条不存在
    pub fn entry_not_found(uid: i64) -> Self {
        AppError::NotFound {
            kind: ResourceKind::Entry,
            id: uid.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Upstream(e.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// Axum response implementation for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = (&self).into();
        let body = Json(ErrorResponse::new(&code, &self.to_string()));
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response()
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,
    /// 错误消息
    pub message: String,
    /// 详细信息
    pub details: Option<String>,
    /// 请求 ID
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// 创建新错误响应
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }

    /// 添加详细信息
    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }
}

/// HTTP 状态码映射
impl From<&AppError> for (u16, String) {
    fn from(err: &AppError) -> (u16, String) {
        match err {
            AppError::NotFound { .. } => (404, "NOT_FOUND".to_string()),
            AppError::Upstream(_) => (502, "UPSTREAM_ERROR".to_string()),
            AppError::Config(_) => (500, "CONFIG_ERROR".to_string()),
            AppError::Internal(_) => (500, "INTERNAL_ERROR".to_string()),
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status_mapping() {
        let err = AppError::lorebook_not_found("book_123");
        let (status, code): (u16, String) = (&err).into();
        assert_eq!(status, 404);
        assert_eq!(code, "NOT_FOUND");
        assert_eq!(err.to_string(), "Lorebook not found: book_123");
    }

    #[test]
    fn test_entry_not_found_carries_uid() {
        let err = AppError::entry_not_found(1700000000000);
        assert_eq!(err.to_string(), "Entry not found: 1700000000000");
    }

    #[test]
    fn test_upstream_maps_to_502() {
        let err = AppError::Upstream("token endpoint unreachable".to_string());
        let (status, code): (u16, String) = (&err).into();
        assert_eq!(status, 502);
        assert_eq!(code, "UPSTREAM_ERROR");
    }
}
