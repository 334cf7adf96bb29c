use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use axion_core::{AppConfig, RecommenderResult};
use axion_domain::{
    NoopScoreSink, PolicyPreset, ScoreTraceSink, ScoringPolicy, TracingScoreSink, WorkerScorer,
};

use crate::error::ApiError;
use crate::handlers::{health::health_check, not_found, recommend::recommend_worker};

/// API应用状态
#[derive(Clone)]
pub struct AppState {
    pub service_name: Arc<str>,
    /// 按部署配置构建的默认评分器
    pub default_scorer: WorkerScorer,
    pub trace_sink: Arc<dyn ScoreTraceSink>,
    pub max_workers_per_request: usize,
    pub allow_preset_override: bool,
}

impl AppState {
    /// 从配置构建状态，评分策略无效时失败
    pub fn from_config(config: &AppConfig) -> RecommenderResult<Self> {
        let trace_sink: Arc<dyn ScoreTraceSink> = if config.observability.score_trace_enabled {
            Arc::new(TracingScoreSink)
        } else {
            Arc::new(NoopScoreSink)
        };

        let policy = ScoringPolicy::from_config(&config.scoring)?;
        let default_scorer = WorkerScorer::new(policy)?.with_trace_sink(Arc::clone(&trace_sink));

        Ok(Self {
            service_name: Arc::from(config.api.service_name.as_str()),
            default_scorer,
            trace_sink,
            max_workers_per_request: config.scoring.max_workers_per_request,
            allow_preset_override: config.scoring.allow_preset_override,
        })
    }

    /// 返回请求使用的评分器：未指定预设时使用默认评分器
    pub fn scorer_for(&self, preset: Option<PolicyPreset>) -> Result<WorkerScorer, ApiError> {
        match preset {
            None => Ok(self.default_scorer.clone()),
            Some(preset) => Ok(WorkerScorer::new(preset.policy())?
                .with_trace_sink(Arc::clone(&self.trace_sink))),
        }
    }
}

/// 创建API路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/api/health", get(health_check))
        // 工人推荐
        .route("/api/recommend_worker", post(recommend_worker))
        .fallback(not_found)
        .with_state(state)
}
