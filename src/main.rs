use loremaster::api::{self, app_state::AppState};
use loremaster::config::loader::ConfigLoader;
use loremaster::observability::{
    ObservabilityState, create_observability_router, init_tracing, metrics_middleware,
};
use loremaster::services::discord::DiscordAuthClient;
use loremaster::services::library::LorebookStore;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;
    init_tracing(&config.logging);

    info!("Starting Loremaster...");
    info!("Configuration loaded successfully");

    // 预置入门传说书，UI 首次运行就有内容可渲染
    let store = LorebookStore::seeded();
    info!("Lorebook store seeded with starter content");

    let auth = DiscordAuthClient::new(config.discord.clone())?;
    if config.discord.client_id.is_empty() {
        info!("Discord OAuth credentials not configured; auth endpoints will report an error");
    }

    let app_state = AppState::new(store, auth);
    info!("Application state created");

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        app_state.store.clone(),
    ));
    let api_router = api::create_router(app_state, &config.cors);
    let metrics_state = observability_state.clone();
    let router = create_observability_router(observability_state)
        .merge(api_router)
        .layer(axum::middleware::from_fn(
            move |req: axum::extract::Request, next: axum::middleware::Next| {
                let state = metrics_state.clone();
                async move { metrics_middleware(req, next, state).await }
            },
        ));
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
