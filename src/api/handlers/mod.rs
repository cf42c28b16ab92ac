//! 请求处理器模块

pub mod auth_handler;
pub mod entry_handler;
pub mod lorebook_handler;
