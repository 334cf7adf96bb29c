use serde::{Deserialize, Serialize};

/// 评分策略配置
///
/// `preset` 选择内置预设，其余 `Option` 字段非空时覆盖预设中的对应参数。
/// 数值合法性（非负权重、正的熟练度刻度等）由领域层在构建评分策略时校验。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub preset: String,
    pub proficiency_scale: Option<f64>,
    pub weights: Option<WeightsConfig>,
    pub distance_normalization: Option<f64>,
    pub default_task_location: Option<LocationConfig>,
    /// 单次请求允许的最大候选工人数
    pub max_workers_per_request: usize,
    /// 是否允许请求通过 `?preset=` 选择其他预设
    pub allow_preset_override: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            preset: "three_factor".to_string(),
            proficiency_scale: None,
            weights: None,
            distance_normalization: None,
            default_task_location: None,
            max_workers_per_request: 1000,
            allow_preset_override: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightsConfig {
    pub skill: f64,
    pub fatigue: f64,
    #[serde(default)]
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LocationConfig {
    pub x: f64,
    pub y: f64,
}

impl ScoringConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.preset.trim().is_empty() {
            return Err(anyhow::anyhow!("评分预设不能为空"));
        }
        if self.max_workers_per_request == 0 {
            return Err(anyhow::anyhow!("单次请求最大工人数必须大于0"));
        }

        Ok(())
    }
}
