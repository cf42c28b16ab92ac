//! DTO 模块
//!
//! 定义请求和响应数据结构。词条与元数据直接复用可序列化的领域模型
//! （LoreEntry / LorebookMeta），避免把四十个字段再抄一遍。

pub mod auth_dto;
pub mod lorebook_dto;
