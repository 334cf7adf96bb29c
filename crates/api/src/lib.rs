//! # Axion API
//!
//! 工人推荐服务的HTTP接口层，基于Axum构建。
//!
//! ## API 端点
//!
//! - `GET /api/health` - 存活检查
//! - `POST /api/recommend_worker` - 为任务推荐最合适的工人，
//!   可通过 `?preset=two_factor` 选择评分预设
//!
//! 错误统一返回 `{"error": {"message", "type", "code", "suggestions", "timestamp"}}`。
//! 没有合格工人不是错误，仍返回200。

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;
pub mod validation;

use axion_core::{AppConfig, RecommenderResult};
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use middleware::{cors_layer, handle_panic, request_logging, trace_layer};
use routes::{create_routes, AppState};

/// 创建完整的API应用
pub fn create_app(config: &AppConfig) -> RecommenderResult<Router> {
    let state = AppState::from_config(config)?;

    let mut app = create_routes(state)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes()));

    if config.api.cors_enabled {
        app = app.layer(cors_layer(&config.api));
    }

    Ok(app.layer(
        ServiceBuilder::new()
            .layer(trace_layer())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(axum::middleware::from_fn(request_logging)),
    ))
}
