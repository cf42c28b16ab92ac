//! 传说书 DTO
//!
//! 定义传说书相关的请求和响应数据结构。

use serde::{Deserialize, Serialize};

use crate::models::entry::EntryPayload;

/// 创建传说书请求（空白或导入）
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CreateLorebookRequest {
    /// 名称，空白时由存储回退为 "New Lorebook"
    pub name: String,
    /// 初始词条
    pub entries: Vec<EntryPayload>,
}

/// 重命名传说书请求
#[derive(Debug, Deserialize)]
pub struct RenameLorebookRequest {
    /// 新名称
    pub name: String,
}

/// 删除传说书响应
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteLorebookResponse {
    /// 状态标记
    pub status: String,
}

impl DeleteLorebookResponse {
    pub fn deleted() -> Self {
        Self {
            status: "deleted".to_string(),
        }
    }
}

/// 活跃传说书响应
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveLorebookResponse {
    /// 当前活跃的传说书 ID
    pub active_id: Option<String>,
}
