//! Discord OAuth 服务
//!
//! 把 Discord 相关逻辑集中在一处，路由层保持易读，以后换身份提供方
//! 也不用动 API 层。核心的传说书逻辑不消费这里的输出。

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::config::DiscordConfig;
use crate::error::{AppError, Result};

/// 授权端点（浏览器跳转用，不走 api_base）
const AUTHORIZE_URL: &str = "https://discord.com/api/oauth2/authorize";

/// Discord 令牌端点的响应
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TokenResponse {
    /// 访问令牌
    pub access_token: String,
    /// 令牌类型
    pub token_type: String,
    /// 过期时间（秒）
    pub expires_in: Option<i64>,
    /// 刷新令牌
    pub refresh_token: Option<String>,
    /// 授权范围
    pub scope: Option<String>,
}

/// Discord OAuth 客户端
///
/// `api_base` 可配置，测试时指向本地 mock 服务。
#[derive(Debug, Clone)]
pub struct DiscordAuthClient {
    config: DiscordConfig,
    http: reqwest::Client,
}

impl DiscordAuthClient {
    /// 创建客户端
    pub fn new(config: DiscordConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(Self { config, http })
    }

    fn require_credentials(&self) -> Result<()> {
        if self.config.client_id.is_empty() || self.config.client_secret.is_empty() {
            return Err(AppError::Config(
                "Discord OAuth credentials are not configured".into(),
            ));
        }
        Ok(())
    }

    /// 构造授权跳转地址
    ///
    /// Scope 只要 identify（用户名、头像）。
    pub fn auth_url(&self) -> Result<String> {
        if self.config.client_id.is_empty() {
            return Err(AppError::Config("DISCORD client_id is not set".into()));
        }

        Ok(format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope=identify",
            AUTHORIZE_URL,
            self.config.client_id,
            urlencoding::encode(&self.config.redirect_uri),
        ))
    }

    /// 用授权码换取访问令牌
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
        self.require_credentials()?;

        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        let response = self
            .http
            .post(format!("{}/oauth2/token", self.config.api_base))
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Discord token endpoint returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response.json().await?;
        if token.access_token.is_empty() {
            return Err(AppError::Upstream(
                "Discord did not return an access token".into(),
            ));
        }

        Ok(token)
    }

    /// 用访问令牌拉取用户档案
    pub async fn fetch_user(&self, access_token: &str) -> Result<serde_json::Value> {
        if access_token.is_empty() {
            return Err(AppError::Upstream("Missing Discord access token".into()));
        }

        let response = self
            .http
            .get(format!("{}/users/@me", self.config.api_base))
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Discord user endpoint returned {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}
