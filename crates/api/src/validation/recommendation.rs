use axion_domain::PolicyPreset;

use crate::error::{ApiError, ApiResult};

/// 验证候选工人数量不超过部署上限
pub fn ensure_worker_limit(worker_count: usize, max_workers: usize) -> ApiResult<()> {
    if worker_count > max_workers {
        return Err(ApiError::BadRequest(format!(
            "候选工人数量 {} 超过上限 {}",
            worker_count, max_workers
        )));
    }
    Ok(())
}

/// 解析请求中的评分预设，空字符串视为未指定
pub fn resolve_preset(
    requested: Option<&str>,
    allow_override: bool,
) -> ApiResult<Option<PolicyPreset>> {
    let Some(name) = requested.map(str::trim).filter(|name| !name.is_empty()) else {
        return Ok(None);
    };

    if !allow_override {
        return Err(ApiError::BadRequest(
            "当前部署不允许按请求选择评分预设".to_string(),
        ));
    }

    Ok(Some(name.parse()?))
}
