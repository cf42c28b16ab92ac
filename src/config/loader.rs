use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use std::path::PathBuf;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 搜索路径：
    /// 1. ./config.toml
    /// 2. 环境变量
    pub fn load() -> Result<AppConfig, figment::Error> {
        let figment = Figment::from(figment::providers::Serialized::defaults(
            AppConfig::development(),
        ))
        .merge(Toml::file("config.toml"))
        .merge(Env::prefixed("LOREMASTER_").split("__").global());

        figment.extract()
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        let figment = Figment::from(figment::providers::Serialized::defaults(
            AppConfig::development(),
        ))
        .merge(Toml::file(path))
        .merge(Env::prefixed("LOREMASTER_").split("__").global());

        figment.extract()
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.discord.api_base.is_empty() {
            return Err(ConfigValidationError::MissingDiscordApiBase);
        }

        if !config.discord.client_id.is_empty() && config.discord.client_secret.is_empty() {
            return Err(ConfigValidationError::IncompleteDiscordCredentials);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("Discord API 基础地址未配置")]
    MissingDiscordApiBase,

    #[error("Discord client_id 已配置但缺少 client_secret")]
    IncompleteDiscordCredentials,
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}

/// 检查配置文件是否存在
pub fn config_exists() -> bool {
    default_config_path().exists()
}
