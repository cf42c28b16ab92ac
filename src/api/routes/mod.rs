//! 路由模块

pub mod auth_routes;
pub mod lorebook_routes;
