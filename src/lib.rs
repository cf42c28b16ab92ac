//! Loremaster - 传说书持久化服务
//!
//! 为叙事/角色扮演工具提供传说书（lorebook）的后端存储，替代原先只保存在
//! 浏览器 localStorage 中的数据，并跟踪"当前打开"的传说书会话指针。

pub mod api;
pub mod config;
pub mod error;
pub mod ident;
pub mod models;
pub mod observability;
pub mod services;
