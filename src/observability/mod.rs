//! 可观测性模块
//!
//! 提供指标、结构化日志和健康检查。健康与指标端点直接读传说书存储，
//! 报告图书馆规模和活跃指针状态。

use axum::{Json, Router, response::IntoResponse, routing::get};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::services::library::LorebookStore;

// ===== Simple Metrics (using atomics for zero-dep implementation) =====

/// 简单应用指标
#[derive(Clone, Default)]
pub struct AppMetrics {
    pub http_requests_total: Arc<AtomicU64>,
    pub http_request_duration_sum: Arc<AtomicU64>,
    pub active_connections: Arc<AtomicUsize>,
    pub errors_total: Arc<AtomicU64>,
}

impl AppMetrics {
    /// 记录 HTTP 请求
    pub fn record_http_request(&self, duration_ms: u64) {
        self.http_requests_total.fetch_add(1, Ordering::SeqCst);
        self.http_request_duration_sum
            .fetch_add(duration_ms, Ordering::SeqCst);
    }

    /// 记录活跃连接
    pub fn record_connection(&self, delta: isize) {
        self.active_connections
            .fetch_add(delta as usize, Ordering::SeqCst);
    }

    /// 记录错误
    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 生成 Prometheus 格式指标
    ///
    /// 图书馆规模不在原子计数器里维护，由调用方从存储现算后传入，
    /// 保证数字始终和存储一致。
    pub fn gather(&self, lorebooks: usize, lore_entries: usize) -> String {
        format!(
            r#"# HELP http_requests_total Total HTTP requests
# TYPE http_requests_total counter
http_requests_total {}
# HELP http_request_duration_seconds HTTP request duration in seconds
# TYPE http_request_duration_seconds histogram
http_request_duration_seconds_sum {}
http_request_duration_seconds_count {}
# HELP active_connections Active HTTP connections
# TYPE active_connections gauge
active_connections {}
# HELP lorebooks_total Lorebooks in the library
# TYPE lorebooks_total gauge
lorebooks_total {}
# HELP lore_entries_total Lore entries across all lorebooks
# TYPE lore_entries_total gauge
lore_entries_total {}
# HELP errors_total Total errors
# TYPE errors_total counter
errors_total {}
"#,
            self.http_requests_total.load(Ordering::SeqCst),
            self.http_request_duration_sum.load(Ordering::SeqCst) as f64 / 1000.0,
            self.http_requests_total.load(Ordering::SeqCst),
            self.active_connections.load(Ordering::SeqCst),
            lorebooks,
            lore_entries,
            self.errors_total.load(Ordering::SeqCst),
        )
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
    /// 图书馆里的传说书数量
    pub library_books: usize,
    /// 活跃指针是否已设置
    pub active_lorebook_set: bool,
}

/// 应用状态（用于健康检查）
#[derive(Clone)]
pub struct ObservabilityState {
    pub metrics: Arc<AppMetrics>,
    pub store: Arc<RwLock<LorebookStore>>,
    pub start_time: DateTime<Utc>,
    pub version: String,
}

impl ObservabilityState {
    pub fn new(version: String, store: Arc<RwLock<LorebookStore>>) -> Self {
        Self {
            metrics: Arc::new(AppMetrics::default()),
            store,
            start_time: Utc::now(),
            version,
        }
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_seconds() as f64
    }
}

// ===== Health Check Handlers =====

/// 获取完整健康状态
///
/// 存储是纯内存结构，没有可探测的外部依赖，能拿到读锁即健康；
/// 顺带报告图书馆规模，方便运维一眼确认数据还在。
pub async fn health_check(
    state: axum::extract::State<Arc<ObservabilityState>>,
) -> impl IntoResponse {
    let store = state.store.read().await;

    let health_status = HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: state.uptime_seconds(),
        library_books: store.list_library().len(),
        active_lorebook_set: store.active().is_some(),
    };

    (axum::http::StatusCode::OK, Json(health_status))
}

/// 简单存活检查
pub async fn liveness() -> impl IntoResponse {
    "OK"
}

/// 就绪检查：存储读锁可用即就绪
pub async fn readiness(state: axum::extract::State<Arc<ObservabilityState>>) -> impl IntoResponse {
    let _store = state.store.read().await;
    (axum::http::StatusCode::OK, "Ready")
}

/// Prometheus 指标端点
pub async fn metrics(state: axum::extract::State<Arc<ObservabilityState>>) -> impl IntoResponse {
    let (books, entries) = {
        let store = state.store.read().await;
        let library = store.list_library();
        let entries: usize = library.iter().map(|meta| meta.entry_count).sum();
        (library.len(), entries)
    };

    let output = state.metrics.gather(books, entries);
    (axum::http::StatusCode::OK, output)
}

/// 版本信息端点
pub async fn version(state: axum::extract::State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": state.version,
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
        .with_state(state)
}

// ===== Structured Logging =====

/// 初始化结构化日志
///
/// 级别取自配置，RUST_LOG 环境变量优先；`structured` 打开时输出 JSON 行。
pub fn init_tracing(logging: &crate::config::config::LoggingConfig) {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| format!("info,loremaster={}", logging.level));

    if logging.structured {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_line_number(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}

// ===== Request Metrics Middleware =====

/// 记录请求指标的中间件
pub async fn metrics_middleware(
    req: axum::extract::Request,
    next: axum::middleware::Next,
    state: Arc<ObservabilityState>,
) -> Result<axum::response::Response, std::convert::Infallible> {
    let start = std::time::Instant::now();

    state.metrics.record_connection(1);

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    state.metrics.record_http_request(duration_ms);
    state.metrics.record_connection(-1);

    if response.status().is_server_error() {
        state.metrics.record_error();
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> Arc<ObservabilityState> {
        Arc::new(ObservabilityState::new(
            "0.1.0".to_string(),
            Arc::new(RwLock::new(LorebookStore::seeded())),
        ))
    }

    #[test]
    fn test_metrics_gather_includes_library_gauges() {
        let metrics = AppMetrics::default();
        metrics.record_http_request(100);
        metrics.record_connection(1);
        metrics.record_error();

        let output = metrics.gather(2, 7);
        assert!(output.contains("http_requests_total 1"));
        assert!(output.contains("active_connections 1"));
        assert!(output.contains("lorebooks_total 2"));
        assert!(output.contains("lore_entries_total 7"));
        assert!(output.contains("errors_total 1"));
    }

    #[test]
    fn test_uptime_is_non_negative() {
        let state = test_state();
        assert!(state.uptime_seconds() >= 0.0);
    }

    #[tokio::test]
    async fn test_health_reports_library_size() {
        use axum::body::{Body, to_bytes};
        use axum::http::{Request, StatusCode};
        use tower::ServiceExt;

        let app = create_observability_router(test_state());

        let health = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);
        let bytes = to_bytes(health.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], "0.1.0");
        assert_eq!(body["library_books"], 1);
        assert_eq!(body["active_lorebook_set"], true);

        let live = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(live.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_metrics_endpoint_counts_seeded_store() {
        use axum::body::{Body, to_bytes};
        use axum::http::{Request, StatusCode};
        use tower::ServiceExt;

        let app = create_observability_router(test_state());

        let metrics = app
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(metrics.status(), StatusCode::OK);
        let bytes = to_bytes(metrics.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("lorebooks_total 1"));
        assert!(text.contains("lore_entries_total 1"));
    }
}
