use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::discord::DiscordAuthClient;
use crate::services::library::LorebookStore;

/// Application state containing all shared services
///
/// 在进程启动时构造一次并注入路由层，没有隐式单例。存储上的一把
/// RwLock 保证了对 LorebookStore 的调用串行化（单写者契约）。
#[derive(Clone)]
pub struct AppState {
    /// 传说书存储
    pub store: Arc<RwLock<LorebookStore>>,
    /// Discord OAuth 客户端
    pub auth: Arc<DiscordAuthClient>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &"Arc<RwLock<LorebookStore>>")
            .field("auth", &"Arc<DiscordAuthClient>")
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(store: LorebookStore, auth: DiscordAuthClient) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            auth: Arc::new(auth),
        }
    }
}
