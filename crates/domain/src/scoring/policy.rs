use std::fmt;
use std::str::FromStr;

use axion_core::{RecommenderError, RecommenderResult, ScoringConfig};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::value_objects::Location;

/// 100×100 坐标系对角线长度的近似值
pub const DEFAULT_DISTANCE_NORMALIZATION: f64 = 141.0;

/// 各评分维度的权重
///
/// 约定权重之和为 1.0，使总分落在 [0, 1] 附近便于解读；
/// 该约定只记录告警，不强制。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringWeights {
    pub skill: f64,
    pub fatigue: f64,
    pub distance: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.fatigue + self.distance
    }
}

/// 内置评分预设
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PolicyPreset {
    /// 技能 0.5 / 疲劳 0.3 / 距离 0.2，熟练度刻度 5
    ThreeFactor,
    /// 技能 0.6 / 疲劳 0.4，无距离项，熟练度刻度 3
    TwoFactor,
}

impl PolicyPreset {
    pub const ALL: [PolicyPreset; 2] = [PolicyPreset::ThreeFactor, PolicyPreset::TwoFactor];

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyPreset::ThreeFactor => "three_factor",
            PolicyPreset::TwoFactor => "two_factor",
        }
    }

    pub fn policy(self) -> ScoringPolicy {
        match self {
            PolicyPreset::ThreeFactor => ScoringPolicy::three_factor(),
            PolicyPreset::TwoFactor => ScoringPolicy::two_factor(),
        }
    }
}

impl fmt::Display for PolicyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyPreset {
    type Err = RecommenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "three_factor" => Ok(PolicyPreset::ThreeFactor),
            "two_factor" => Ok(PolicyPreset::TwoFactor),
            _ => Err(RecommenderError::unknown_preset(s)),
        }
    }
}

/// 评分策略：权重、熟练度刻度和可选的距离归一化常数
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringPolicy {
    pub weights: ScoringWeights,
    /// 原始熟练度除以该值得到 [0, 1] 的技能分
    pub proficiency_scale: f64,
    /// 为 `None` 时不计算距离项
    pub distance_normalization: Option<f64>,
    /// 任务未提供位置时使用的坐标
    pub default_task_location: Location,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::three_factor()
    }
}

impl ScoringPolicy {
    pub fn three_factor() -> Self {
        Self {
            weights: ScoringWeights {
                skill: 0.5,
                fatigue: 0.3,
                distance: 0.2,
            },
            proficiency_scale: 5.0,
            distance_normalization: Some(DEFAULT_DISTANCE_NORMALIZATION),
            default_task_location: Location::default(),
        }
    }

    pub fn two_factor() -> Self {
        Self {
            weights: ScoringWeights {
                skill: 0.6,
                fatigue: 0.4,
                distance: 0.0,
            },
            proficiency_scale: 3.0,
            distance_normalization: None,
            default_task_location: Location::default(),
        }
    }

    /// 从部署配置构建策略：以预设为基础，再应用配置中的覆盖项
    pub fn from_config(config: &ScoringConfig) -> RecommenderResult<Self> {
        let preset: PolicyPreset = config.preset.parse()?;
        let mut policy = preset.policy();

        if let Some(scale) = config.proficiency_scale {
            policy.proficiency_scale = scale;
        }
        if let Some(weights) = config.weights {
            policy.weights = ScoringWeights {
                skill: weights.skill,
                fatigue: weights.fatigue,
                distance: weights.distance,
            };
        }
        if let Some(normalization) = config.distance_normalization {
            policy.distance_normalization = Some(normalization);
        }
        if let Some(location) = config.default_task_location {
            policy.default_task_location = Location::new(location.x, location.y);
        }

        policy.validate()?;

        let weight_sum = policy.weights.sum();
        if (weight_sum - 1.0).abs() > 1e-6 {
            warn!(
                "评分权重之和为 {:.3}，不等于1.0，总分将不再落在 [0, 1] 区间",
                weight_sum
            );
        }
        info!(
            "评分策略已加载: 预设={}, 权重={:?}, 熟练度刻度={}, 距离归一化={:?}",
            preset, policy.weights, policy.proficiency_scale, policy.distance_normalization
        );

        Ok(policy)
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_proficiency_scale(mut self, scale: f64) -> Self {
        self.proficiency_scale = scale;
        self
    }

    pub fn with_distance_normalization(mut self, normalization: Option<f64>) -> Self {
        self.distance_normalization = normalization;
        self
    }

    pub fn with_default_task_location(mut self, location: Location) -> Self {
        self.default_task_location = location;
        self
    }

    pub fn validate(&self) -> RecommenderResult<()> {
        let weights = [
            ("skill", self.weights.skill),
            ("fatigue", self.weights.fatigue),
            ("distance", self.weights.distance),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(RecommenderError::invalid_policy(format!(
                    "{name} 权重必须是非负有限数，当前为 {value}"
                )));
            }
        }

        if !self.proficiency_scale.is_finite() || self.proficiency_scale <= 0.0 {
            return Err(RecommenderError::invalid_policy(format!(
                "熟练度刻度必须大于0，当前为 {}",
                self.proficiency_scale
            )));
        }

        match self.distance_normalization {
            Some(normalization) if !normalization.is_finite() || normalization <= 0.0 => {
                return Err(RecommenderError::invalid_policy(format!(
                    "距离归一化常数必须大于0，当前为 {normalization}"
                )));
            }
            None if self.weights.distance > 0.0 => {
                return Err(RecommenderError::invalid_policy(
                    "未启用距离项时距离权重必须为0",
                ));
            }
            _ => {}
        }

        if !self.default_task_location.is_finite() {
            return Err(RecommenderError::invalid_policy("默认任务位置必须是有限坐标"));
        }

        Ok(())
    }
}
