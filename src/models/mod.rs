//! 核心数据模型模块
//!
//! 定义 Loremaster 的核心数据结构：LoreEntry, Lorebook 以及它们的
//! 入站载荷和元数据视图。

pub mod entry;
pub mod lorebook;

pub use entry::*;
pub use lorebook::*;
