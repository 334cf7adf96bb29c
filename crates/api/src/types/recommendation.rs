use axion_domain::{
    Location, RecommendationResult, Skill, Task, TaskPriority, Worker, WorkerSkill, WorkerStatus,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// `POST /api/recommend_worker` 请求体
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(nested)]
    pub task: TaskPayload,
    #[validate(nested)]
    pub available_workers: Vec<WorkerPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaskPayload {
    #[validate(length(min = 1, message = "任务ID不能为空"))]
    pub id: String,
    pub description: String,
    pub priority: TaskPriority,
    #[serde(rename = "requiredSkillId", default)]
    pub required_skill_id: Option<String>,
    #[serde(default)]
    pub location_x: Option<f64>,
    #[serde(default)]
    pub location_y: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WorkerPayload {
    #[validate(length(min = 1, message = "工人ID不能为空"))]
    pub id: String,
    pub name: String,
    pub status: WorkerStatus,
    #[serde(rename = "fatigueLevel")]
    #[validate(range(min = 0.0, max = 1.0, message = "疲劳度必须在0到1之间"))]
    pub fatigue_level: f64,
    #[serde(default)]
    pub location_x: Option<f64>,
    #[serde(default)]
    pub location_y: Option<f64>,
    #[validate(nested)]
    pub skills: Vec<WorkerSkillPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WorkerSkillPayload {
    #[validate(nested)]
    pub skill: SkillPayload,
    #[validate(range(min = 0, message = "熟练度不能为负数"))]
    pub proficiency: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillPayload {
    #[validate(length(min = 1, message = "技能ID不能为空"))]
    pub id: String,
    pub name: String,
}

/// 推荐接口的查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendQuery {
    pub preset: Option<String>,
}

/// `POST /api/recommend_worker` 响应体
///
/// 找到工人时包含 `worker_name` 和 `score`，否则 `recommended_worker_id`
/// 为 `null` 并附带 `message`。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    pub recommended_worker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 只有两个坐标都存在时才视为有位置
fn pair_location(x: Option<f64>, y: Option<f64>) -> Option<Location> {
    match (x, y) {
        (Some(x), Some(y)) => Some(Location::new(x, y)),
        _ => None,
    }
}

impl From<TaskPayload> for Task {
    fn from(payload: TaskPayload) -> Self {
        Task {
            location: pair_location(payload.location_x, payload.location_y),
            id: payload.id,
            description: payload.description,
            priority: payload.priority,
            required_skill_id: payload.required_skill_id,
        }
    }
}

impl From<WorkerPayload> for Worker {
    fn from(payload: WorkerPayload) -> Self {
        Worker {
            location: pair_location(payload.location_x, payload.location_y),
            id: payload.id,
            name: payload.name,
            status: payload.status,
            fatigue_level: payload.fatigue_level,
            skills: payload
                .skills
                .into_iter()
                .map(|ws| WorkerSkill {
                    skill: Skill {
                        id: ws.skill.id,
                        name: ws.skill.name,
                    },
                    proficiency: ws.proficiency,
                })
                .collect(),
        }
    }
}

impl RecommendationRequest {
    pub fn into_domain(self) -> (Task, Vec<Worker>) {
        let task = Task::from(self.task);
        let workers = self
            .available_workers
            .into_iter()
            .map(Worker::from)
            .collect();
        (task, workers)
    }
}

impl From<RecommendationResult> for RecommendationResponse {
    fn from(result: RecommendationResult) -> Self {
        match result {
            RecommendationResult::Recommended {
                worker_id,
                worker_name,
                score,
            } => Self {
                recommended_worker_id: Some(worker_id),
                worker_name: Some(worker_name),
                score: Some(score),
                message: None,
            },
            RecommendationResult::NoSuitableWorker { message } => Self {
                recommended_worker_id: None,
                worker_name: None,
                score: None,
                message: Some(message),
            },
        }
    }
}
