use serde::{Deserialize, Serialize};

use crate::value_objects::Location;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub priority: TaskPriority,
    /// 为空表示任务没有技能要求
    pub required_skill_id: Option<String>,
    /// 为空时使用评分策略的默认任务位置
    pub location: Option<Location>,
}

/// 任务优先级，目前不参与评分
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl Task {
    pub fn location_or(&self, fallback: Location) -> Location {
        self.location.unwrap_or(fallback)
    }
}
