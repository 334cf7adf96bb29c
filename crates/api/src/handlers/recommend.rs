use axum::{
    extract::State,
    Json,
};
use tracing::info;

use crate::{
    error::ApiResult,
    routes::AppState,
    types::{RecommendQuery, RecommendationRequest, RecommendationResponse},
    validation::{ensure_worker_limit, resolve_preset, QueryParams, ValidatedJson},
};

/// 为任务推荐最合适的工人
///
/// 没有合格工人时仍返回200，响应中 `recommended_worker_id` 为 `null`。
pub async fn recommend_worker(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<RecommendQuery>,
    ValidatedJson(request): ValidatedJson<RecommendationRequest>,
) -> ApiResult<Json<RecommendationResponse>> {
    ensure_worker_limit(request.available_workers.len(), state.max_workers_per_request)?;
    let preset = resolve_preset(query.preset.as_deref(), state.allow_preset_override)?;
    let scorer = state.scorer_for(preset)?;

    let (task, workers) = request.into_domain();
    let result = scorer.recommend(&task, &workers);

    info!(
        task_id = %task.id,
        candidates = workers.len(),
        recommended = ?result.worker_id(),
        "推荐完成"
    );

    Ok(Json(result.into()))
}
