//! 传说词条模型
//!
//! 词条的规范形态（LoreEntry）、宽松的入站形态（EntryPayload），
//! 以及把异构关键词表示统一成字符串序列的归一化函数。
//!
//! 字段名沿用前端的 camelCase 线格式，未识别的字段原样保留，
//! 保证与其他工具导出的传说书格式互通。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 把任意 JSON 值归一化为字符串序列
///
/// - null / 缺失 → 空序列
/// - 数组 → 逐元素转为字符串，保持顺序
/// - 对象 → 按对象自身的键顺序取值（不取键）
/// - 其他标量 → 单元素序列
///
/// 对整个输入域都是全函数，永不失败。第三方传说书常把关键词数组
/// 编码成 {"0": "...", "1": "..."} 形式的对象，这里统一展开。
pub fn normalize_string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(stringify).collect(),
        Some(Value::Object(map)) => map.values().map(stringify).collect(),
        Some(other) => vec![stringify(other)],
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 扫描深度：前端允许数字或字符串（如 "same as depth"）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScanDepth {
    Number(i64),
    Text(String),
}

/// 一条传说词条的规范记录
///
/// 所有字段在归一化边界处一次性解析为"值或默认值"，存储后不再有
/// 可选的核心字段。未识别的字段进入 `extra` 包并在输出时合并回去。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoreEntry {
    /// 词条 UID，归属传说书内唯一
    pub uid: i64,
    /// 备注（编辑器里的标题）
    pub comment: String,
    /// 词条正文
    pub content: String,
    /// 触发关键词
    pub key: Vec<String>,
    /// 次级触发关键词
    pub keysecondary: Vec<String>,
    pub enabled: bool,
    pub disabled: bool,
    pub constant: bool,
    pub selective: bool,
    pub add_memo: bool,
    pub case_sensitive: bool,
    pub match_whole_words: bool,
    pub position: i64,
    pub order: i64,
    pub sticky: i64,
    pub cooldown: i64,
    pub delay: i64,
    pub use_probability: bool,
    pub probability: i64,
    pub selective_logic: i64,
    pub exclude_recursion: bool,
    pub prevent_recursion: bool,
    pub delay_until_recursion: bool,
    pub depth: i64,
    pub group: String,
    pub group_override: bool,
    pub group_weight: i64,
    pub role: String,
    pub automation_id: String,
    pub ignore_budget: bool,
    pub match_persona_description: bool,
    pub match_character_description: bool,
    pub match_character_personality: bool,
    pub match_character_depth_prompt: bool,
    pub match_scenario: bool,
    pub match_creator_notes: bool,
    pub use_group_scoring: bool,
    pub outlet_name: String,
    /// 角色过滤器，按原样透传
    pub character_filter: Map<String, Value>,
    pub scan_depth: Option<ScanDepth>,
    /// 未识别字段的开放包，输出时原样合并
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for LoreEntry {
    fn default() -> Self {
        Self {
            uid: 0,
            comment: String::new(),
            content: String::new(),
            key: Vec::new(),
            keysecondary: Vec::new(),
            enabled: true,
            disabled: false,
            constant: false,
            selective: true,
            add_memo: true,
            case_sensitive: false,
            match_whole_words: true,
            position: 0,
            order: 100,
            sticky: 0,
            cooldown: 0,
            delay: 0,
            use_probability: false,
            probability: 100,
            selective_logic: 0,
            exclude_recursion: false,
            prevent_recursion: false,
            delay_until_recursion: false,
            depth: 4,
            group: String::new(),
            group_override: false,
            group_weight: 100,
            role: String::new(),
            automation_id: String::new(),
            ignore_budget: false,
            match_persona_description: false,
            match_character_description: false,
            match_character_personality: false,
            match_character_depth_prompt: false,
            match_scenario: false,
            match_creator_notes: false,
            use_group_scoring: false,
            outlet_name: String::new(),
            character_filter: Map::new(),
            scan_depth: None,
            extra: Map::new(),
        }
    }
}

/// 词条的入站载荷
///
/// 全字段可选；关键词字段接受数组、对象或标量的原始 JSON，
/// 由归一化边界统一成 LoreEntry 的形态。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntryPayload {
    pub uid: Option<i64>,
    pub comment: Option<String>,
    pub content: Option<String>,
    /// 数组 / 对象 / 标量 / null 均可
    pub key: Option<Value>,
    pub keysecondary: Option<Value>,
    pub enabled: Option<bool>,
    pub disabled: Option<bool>,
    pub constant: Option<bool>,
    pub selective: Option<bool>,
    pub add_memo: Option<bool>,
    pub case_sensitive: Option<bool>,
    pub match_whole_words: Option<bool>,
    pub position: Option<i64>,
    pub order: Option<i64>,
    pub sticky: Option<i64>,
    pub cooldown: Option<i64>,
    pub delay: Option<i64>,
    pub use_probability: Option<bool>,
    pub probability: Option<i64>,
    pub selective_logic: Option<i64>,
    pub exclude_recursion: Option<bool>,
    pub prevent_recursion: Option<bool>,
    pub delay_until_recursion: Option<bool>,
    pub depth: Option<i64>,
    pub group: Option<String>,
    pub group_override: Option<bool>,
    pub group_weight: Option<i64>,
    pub role: Option<String>,
    pub automation_id: Option<String>,
    pub ignore_budget: Option<bool>,
    pub match_persona_description: Option<bool>,
    pub match_character_description: Option<bool>,
    pub match_character_personality: Option<bool>,
    pub match_character_depth_prompt: Option<bool>,
    pub match_scenario: Option<bool>,
    pub match_creator_notes: Option<bool>,
    pub use_group_scoring: Option<bool>,
    pub outlet_name: Option<String>,
    pub character_filter: Option<Map<String, Value>>,
    pub scan_depth: Option<ScanDepth>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
