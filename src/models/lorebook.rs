//! 传说书聚合模型

use serde::{Deserialize, Serialize};

use crate::ident::now_ms;
use crate::models::entry::LoreEntry;

/// 传说书实体
///
/// 一个命名的词条集合，携带派生的元数据。`entry_count` 始终等于
/// `entries.len()`，由 `touch` 重新计算，不可独立设置；`created`
/// 构造后不变，`last_edited` 随每次变更刷新。时间戳为毫秒整数，
/// 与前端格式一致。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lorebook {
    /// 传说书唯一标识，创建后不可变
    pub id: String,
    /// 名称
    pub name: String,
    /// 词条数量（派生）
    pub entry_count: usize,
    /// 最后编辑时间（毫秒）
    pub last_edited: i64,
    /// 创建时间（毫秒）
    pub created: i64,
    /// 词条，保持插入顺序
    pub entries: Vec<LoreEntry>,
}

impl Lorebook {
    /// 构造新传说书
    pub fn new(id: String, name: String, entries: Vec<LoreEntry>) -> Self {
        let now = now_ms();
        Self {
            id,
            name,
            entry_count: entries.len(),
            last_edited: now,
            created: now,
            entries,
        }
    }

    /// 变更后刷新派生元数据
    pub fn touch(&mut self) {
        self.entry_count = self.entries.len();
        self.last_edited = now_ms();
    }

    /// 轻量的图书馆视图
    pub fn meta(&self) -> LorebookMeta {
        LorebookMeta {
            id: self.id.clone(),
            name: self.name.clone(),
            entry_count: self.entries.len(),
            last_edited: self.last_edited,
            created: self.created,
        }
    }
}

/// 图书馆列表用的传说书元数据（不含词条正文）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LorebookMeta {
    pub id: String,
    pub name: String,
    pub entry_count: usize,
    pub last_edited: i64,
    pub created: i64,
}

/// 词条增删改的结果：变更后的词条（删除时为 None）加最新元数据，
/// 让客户端能同步计数和时间戳
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryMutation {
    pub entry: Option<LoreEntry>,
    pub lorebook: LorebookMeta,
}
