//! 服务模块

pub mod discord;
pub mod library;

pub use discord::{DiscordAuthClient, TokenResponse};
pub use library::LorebookStore;
