use serde::Serialize;
use tracing::info;

use crate::models::{Task, Worker};
use crate::value_objects::Location;

/// 单个工人的评分明细
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub worker_id: String,
    pub worker_name: String,
    pub skill_score: f64,
    pub fatigue_score: f64,
    /// 策略未启用距离项时为 `None`
    pub distance_score: Option<f64>,
    /// 工人到任务的原始距离，工人没有位置时为 `None`
    pub distance: Option<f64>,
    pub total: f64,
}

/// 工人被排除的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingRequiredSkill,
    NonFiniteScore,
}

/// 评分过程的诊断输出
///
/// 实现不得影响评分结果；默认方法全部为空操作。
pub trait ScoreTraceSink: Send + Sync {
    fn analysis_started(&self, _task: &Task, _worker_count: usize, _task_location: Location) {}

    fn worker_scored(&self, _breakdown: &ScoreBreakdown) {}

    fn worker_skipped(&self, _worker: &Worker, _reason: SkipReason) {}
}

/// 丢弃所有诊断输出
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScoreSink;

impl ScoreTraceSink for NoopScoreSink {}

/// 通过 `tracing` 输出结构化诊断事件
///
/// 所有事件都在 `info` 级别输出，默认日志级别下即可看到每个工人的评分明细。
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingScoreSink;

impl ScoreTraceSink for TracingScoreSink {
    fn analysis_started(&self, task: &Task, worker_count: usize, task_location: Location) {
        info!(
            task_id = %task.id,
            worker_count,
            task_x = task_location.x,
            task_y = task_location.y,
            "开始为任务 '{}' 分析 {} 名工人",
            task.description,
            worker_count
        );
    }

    fn worker_scored(&self, breakdown: &ScoreBreakdown) {
        info!(
            worker_id = %breakdown.worker_id,
            skill = breakdown.skill_score,
            fatigue = breakdown.fatigue_score,
            distance_score = ?breakdown.distance_score,
            distance = ?breakdown.distance,
            total = breakdown.total,
            "工人 {} 评分: Skill={:.2}, Fatigue={:.2} | FINAL={:.3}",
            breakdown.worker_name,
            breakdown.skill_score,
            breakdown.fatigue_score,
            breakdown.total
        );
    }

    fn worker_skipped(&self, worker: &Worker, reason: SkipReason) {
        info!(worker_id = %worker.id, ?reason, "跳过工人 {}", worker.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskPriority, WorkerStatus};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn sample_breakdown() -> ScoreBreakdown {
        ScoreBreakdown {
            worker_id: "w-42".to_string(),
            worker_name: "Alice".to_string(),
            skill_score: 1.0,
            fatigue_score: 0.8,
            distance_score: None,
            distance: None,
            total: 0.92,
        }
    }

    #[test]
    fn test_tracing_sink_logs_breakdown_at_info_level() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let task = Task {
            id: "t1".to_string(),
            description: "Weld frame".to_string(),
            priority: TaskPriority::Medium,
            required_skill_id: Some("S1".to_string()),
            location: None,
        };
        let worker = Worker {
            id: "w-7".to_string(),
            name: "Bob".to_string(),
            status: WorkerStatus::Available,
            fatigue_level: 0.0,
            location: None,
            skills: Vec::new(),
        };

        tracing::subscriber::with_default(subscriber, || {
            TracingScoreSink.analysis_started(&task, 2, Location::default());
            TracingScoreSink.worker_scored(&sample_breakdown());
            TracingScoreSink.worker_skipped(&worker, SkipReason::MissingRequiredSkill);
        });

        let output = logs.contents();
        assert!(output.contains("Weld frame"), "{output}");
        assert!(output.contains("w-42"), "{output}");
        assert!(output.contains("FINAL=0.920"), "{output}");
        assert!(output.contains("w-7"), "{output}");
    }
}
