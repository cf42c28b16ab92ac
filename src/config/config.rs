use serde::{Deserialize, Serialize};

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CorsConfig {
    /// 允许的前端来源
    pub allowed_origins: Vec<String>,
}

/// Discord OAuth 配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DiscordConfig {
    /// OAuth 应用客户端 ID
    pub client_id: String,
    /// OAuth 应用客户端密钥
    pub client_secret: String,
    /// 授权回调地址
    pub redirect_uri: String,
    /// Discord API 基础地址（测试时可指向本地 mock）
    pub api_base: String,
    /// 请求超时（秒）
    pub http_timeout: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// CORS 配置
    pub cors: CorsConfig,
    /// Discord OAuth 配置
    pub discord: DiscordConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8000,
            },
            cors: CorsConfig {
                allowed_origins: vec![
                    "http://localhost:5173".into(),
                    "http://127.0.0.1:5173".into(),
                    "http://localhost:5330".into(),
                    "http://127.0.0.1:5330".into(),
                ],
            },
            discord: DiscordConfig {
                client_id: String::new(),
                client_secret: String::new(),
                redirect_uri: "http://localhost:5173/auth/callback".into(),
                api_base: "https://discord.com/api/v10".into(),
                http_timeout: 10,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: true,
            },
            app_name: "loremaster".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config
    }
}
