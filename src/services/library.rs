//! 图书馆服务
//!
//! `LorebookStore` 是传说书集合的唯一权威：传说书与词条的全部增删改查，
//! 以及"当前打开"指针的生命周期，都经由它完成。存储是进程内结构，
//! 刻意保持轻量，便于以后换成数据库实现而不动路由层。

use std::collections::BTreeMap;

use crate::error::{AppError, Result};
use crate::ident::{new_entry_uid, new_lorebook_id};
use crate::models::entry::{EntryPayload, LoreEntry, normalize_string_list};
use crate::models::lorebook::{EntryMutation, Lorebook, LorebookMeta};

/// 传说书存储（变更引擎）
///
/// 单写者语义：方法都是同步的，多步变更（先改后 touch）不具备跨挂起点
/// 的原子性，调用方必须对每次调用串行化 —— HTTP 层把实例放在一把
/// `tokio::sync::RwLock` 里，临界区内没有 await 点。
///
/// 键为生成的按时间排序的 ID，BTreeMap 的迭代顺序即创建顺序，
/// 满足图书馆列表"足够稳定"的展示要求。
#[derive(Debug, Default)]
pub struct LorebookStore {
    books: BTreeMap<String, Lorebook>,
    active_id: Option<String>,
}

impl LorebookStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带初始数据的存储
    ///
    /// 预置一本入门传说书并把活跃指针指向它，让 UI 首次运行就有
    /// 内容可渲染，也让测试有确定的初始状态。
    pub fn seeded() -> Self {
        let mut store = Self::new();

        let starter = EntryPayload {
            comment: Some("Getting Started".into()),
            content: Some(
                "Replace me with your own lore. This entry demonstrates the schema.".into(),
            ),
            key: Some(serde_json::json!(["demo", "lore"])),
            keysecondary: Some(serde_json::json!(["sample"])),
            constant: Some(false),
            ..EntryPayload::default()
        };

        // 第一本创建即成为活跃传说书
        store.create_lorebook("Starter Lorebook", vec![starter]);
        store
    }

    // -- 公开 API ----------------------------------------------------------- //

    /// 图书馆列表：每本传说书一条轻量元数据
    pub fn list_library(&self) -> Vec<LorebookMeta> {
        self.books.values().map(Lorebook::meta).collect()
    }

    /// 按 ID 取完整传说书
    pub fn get_lorebook(&self, lorebook_id: &str) -> Result<Lorebook> {
        self.books
            .get(lorebook_id)
            .cloned()
            .ok_or_else(|| AppError::lorebook_not_found(lorebook_id))
    }

    /// 创建传说书并归一化其初始词条
    ///
    /// 名称为空白时回退为 "New Lorebook"。仅当活跃指针尚未设置时，
    /// 新书成为活跃传说书。
    pub fn create_lorebook(&mut self, name: &str, entries: Vec<EntryPayload>) -> Lorebook {
        let book_id = new_lorebook_id();
        let normalized: Vec<LoreEntry> = entries
            .into_iter()
            .map(|entry| normalize_entry(entry, None))
            .collect();

        let name = if name.trim().is_empty() {
            "New Lorebook".to_string()
        } else {
            name.to_string()
        };

        let book = Lorebook::new(book_id.clone(), name, normalized);
        self.books.insert(book_id.clone(), book.clone());

        if self.active_id.is_none() {
            self.active_id = Some(book_id);
        }

        book
    }

    /// 删除传说书
    ///
    /// 删除的是活跃传说书时，指针回退到任意一本剩余的书，没有则清空。
    pub fn delete_lorebook(&mut self, lorebook_id: &str) -> Result<()> {
        if self.books.remove(lorebook_id).is_none() {
            return Err(AppError::lorebook_not_found(lorebook_id));
        }

        if self.active_id.as_deref() == Some(lorebook_id) {
            self.active_id = self.books.keys().next().cloned();
        }

        Ok(())
    }

    /// 重命名传说书
    pub fn rename_lorebook(&mut self, lorebook_id: &str, name: &str) -> Result<LorebookMeta> {
        let book = self
            .books
            .get_mut(lorebook_id)
            .ok_or_else(|| AppError::lorebook_not_found(lorebook_id))?;

        book.name = name.to_string();
        book.touch();
        Ok(book.meta())
    }

    /// 追加词条
    ///
    /// 载荷缺少 UID（或为 0）时由后端铸造。
    pub fn add_entry(&mut self, lorebook_id: &str, payload: EntryPayload) -> Result<EntryMutation> {
        let book = self
            .books
            .get_mut(lorebook_id)
            .ok_or_else(|| AppError::lorebook_not_found(lorebook_id))?;

        let normalized = normalize_entry(payload, None);
        book.entries.push(normalized.clone());
        book.touch();

        Ok(EntryMutation {
            entry: Some(normalized),
            lorebook: book.meta(),
        })
    }

    /// 按 UID 整体替换词条
    ///
    /// 替换而非字段级合并：载荷里省略的字段回到默认值。替换后的词条
    /// 强制保留原 UID，载荷自带的 UID 被覆盖。
    pub fn update_entry(
        &mut self,
        lorebook_id: &str,
        entry_uid: i64,
        payload: EntryPayload,
    ) -> Result<EntryMutation> {
        let book = self
            .books
            .get_mut(lorebook_id)
            .ok_or_else(|| AppError::lorebook_not_found(lorebook_id))?;

        let Some(idx) = book.entries.iter().position(|e| e.uid == entry_uid) else {
            return Err(AppError::entry_not_found(entry_uid));
        };

        book.entries[idx] = normalize_entry(payload, Some(entry_uid));
        book.touch();

        Ok(EntryMutation {
            entry: Some(book.entries[idx].clone()),
            lorebook: book.meta(),
        })
    }

    /// 按 UID 删除词条（预期恰好一条，同 UID 的全部移除）
    pub fn delete_entry(&mut self, lorebook_id: &str, entry_uid: i64) -> Result<EntryMutation> {
        let book = self
            .books
            .get_mut(lorebook_id)
            .ok_or_else(|| AppError::lorebook_not_found(lorebook_id))?;

        let before = book.entries.len();
        book.entries.retain(|entry| entry.uid != entry_uid);

        if book.entries.len() == before {
            return Err(AppError::entry_not_found(entry_uid));
        }

        book.touch();

        Ok(EntryMutation {
            entry: None,
            lorebook: book.meta(),
        })
    }

    /// 设置活跃传说书
    pub fn set_active(&mut self, lorebook_id: &str) -> Result<String> {
        if !self.books.contains_key(lorebook_id) {
            return Err(AppError::lorebook_not_found(lorebook_id));
        }
        self.active_id = Some(lorebook_id.to_string());
        Ok(lorebook_id.to_string())
    }

    /// 无条件清空活跃指针
    pub fn clear_active(&mut self) {
        self.active_id = None;
    }

    /// 当前活跃传说书 ID
    pub fn active(&self) -> Option<&str> {
        self.active_id.as_deref()
    }
}

/// 词条归一化的唯一入口
///
/// 无论词条来自新建、第三方导入还是原位编辑，都经这里得到统一形态：
/// 关键词字段展开为字符串序列，UID 按
/// `force_uid ?? 载荷 UID（非零） ?? 新铸造` 解析，
/// 其余字段一次性解析为"值或默认值"。
fn normalize_entry(payload: EntryPayload, force_uid: Option<i64>) -> LoreEntry {
    let uid = force_uid
        .or_else(|| payload.uid.filter(|uid| *uid != 0))
        .unwrap_or_else(new_entry_uid);

    LoreEntry {
        uid,
        comment: payload.comment.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
        key: normalize_string_list(payload.key.as_ref()),
        keysecondary: normalize_string_list(payload.keysecondary.as_ref()),
        enabled: payload.enabled.unwrap_or(true),
        disabled: payload.disabled.unwrap_or(false),
        constant: payload.constant.unwrap_or(false),
        selective: payload.selective.unwrap_or(true),
        add_memo: payload.add_memo.unwrap_or(true),
        case_sensitive: payload.case_sensitive.unwrap_or(false),
        match_whole_words: payload.match_whole_words.unwrap_or(true),
        position: payload.position.unwrap_or(0),
        order: payload.order.unwrap_or(100),
        sticky: payload.sticky.unwrap_or(0),
        cooldown: payload.cooldown.unwrap_or(0),
        delay: payload.delay.unwrap_or(0),
        use_probability: payload.use_probability.unwrap_or(false),
        probability: payload.probability.unwrap_or(100),
        selective_logic: payload.selective_logic.unwrap_or(0),
        exclude_recursion: payload.exclude_recursion.unwrap_or(false),
        prevent_recursion: payload.prevent_recursion.unwrap_or(false),
        delay_until_recursion: payload.delay_until_recursion.unwrap_or(false),
        depth: payload.depth.unwrap_or(4),
        group: payload.group.unwrap_or_default(),
        group_override: payload.group_override.unwrap_or(false),
        group_weight: payload.group_weight.unwrap_or(100),
        role: payload.role.unwrap_or_default(),
        automation_id: payload.automation_id.unwrap_or_default(),
        ignore_budget: payload.ignore_budget.unwrap_or(false),
        match_persona_description: payload.match_persona_description.unwrap_or(false),
        match_character_description: payload.match_character_description.unwrap_or(false),
        match_character_personality: payload.match_character_personality.unwrap_or(false),
        match_character_depth_prompt: payload.match_character_depth_prompt.unwrap_or(false),
        match_scenario: payload.match_scenario.unwrap_or(false),
        match_creator_notes: payload.match_creator_notes.unwrap_or(false),
        use_group_scoring: payload.use_group_scoring.unwrap_or(false),
        outlet_name: payload.outlet_name.unwrap_or_default(),
        character_filter: payload.character_filter.unwrap_or_default(),
        scan_depth: payload.scan_depth,
        extra: payload.extra,
    }
}
