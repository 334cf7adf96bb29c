use serde::{Deserialize, Serialize};

use crate::value_objects::Location;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub id: String,
    pub name: String,
}

/// 工人掌握的技能及熟练度
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkerSkill {
    pub skill: Skill,
    pub proficiency: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub status: WorkerStatus,
    /// 疲劳度，取值范围 [0, 1]，由调用方保证
    pub fatigue_level: f64,
    pub location: Option<Location>,
    pub skills: Vec<WorkerSkill>,
}

/// Worker状态，仅作展示，不参与筛选
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerStatus {
    Available,
    #[serde(alias = "ON_TASK")]
    Busy,
    Offline,
}

impl Worker {
    /// 返回技能列表中第一个匹配的技能条目
    pub fn find_skill(&self, skill_id: &str) -> Option<&WorkerSkill> {
        self.skills.iter().find(|ws| ws.skill.id == skill_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(id: &str, proficiency: i32) -> WorkerSkill {
        WorkerSkill {
            skill: Skill {
                id: id.to_string(),
                name: format!("skill-{id}"),
            },
            proficiency,
        }
    }

    #[test]
    fn test_find_skill_returns_first_match() {
        let worker = Worker {
            id: "w1".to_string(),
            name: "Alice".to_string(),
            status: WorkerStatus::Available,
            fatigue_level: 0.0,
            location: None,
            skills: vec![skill("S1", 2), skill("S2", 4), skill("S1", 5)],
        };

        assert_eq!(worker.find_skill("S1").map(|ws| ws.proficiency), Some(2));
        assert_eq!(worker.find_skill("S2").map(|ws| ws.proficiency), Some(4));
        assert!(worker.find_skill("S3").is_none());
    }

    #[test]
    fn test_worker_status_wire_names() {
        let status: WorkerStatus = serde_json::from_str("\"AVAILABLE\"").unwrap();
        assert_eq!(status, WorkerStatus::Available);

        let status: WorkerStatus = serde_json::from_str("\"ON_TASK\"").unwrap();
        assert_eq!(status, WorkerStatus::Busy);

        assert_eq!(
            serde_json::to_string(&WorkerStatus::Offline).unwrap(),
            "\"OFFLINE\""
        );
        assert!(serde_json::from_str::<WorkerStatus>("\"SLEEPING\"").is_err());
    }
}
