use std::fmt;
use std::sync::Arc;

use axion_core::RecommenderResult;
use tracing::{debug, warn};

use crate::models::{RecommendationResult, Task, Worker};
use crate::scoring::policy::ScoringPolicy;
use crate::scoring::trace::{NoopScoreSink, ScoreBreakdown, ScoreTraceSink, SkipReason};
use crate::value_objects::Location;

/// 多准则加权评分器
///
/// 对每个合格工人独立计算得分并选出最高者，不做全局分配优化。
/// 持有的策略不可变，评分器可以在线程间共享。
#[derive(Clone)]
pub struct WorkerScorer {
    policy: ScoringPolicy,
    sink: Arc<dyn ScoreTraceSink>,
}

impl fmt::Debug for WorkerScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerScorer")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl WorkerScorer {
    /// 策略无效时拒绝构建
    pub fn new(policy: ScoringPolicy) -> RecommenderResult<Self> {
        policy.validate()?;
        Ok(Self {
            policy,
            sink: Arc::new(NoopScoreSink),
        })
    }

    pub fn with_trace_sink(mut self, sink: Arc<dyn ScoreTraceSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// 计算单个工人的评分明细，不满足技能要求时返回 `None`
    ///
    /// 返回的总分可能不是有限数（例如输入坐标为 NaN），
    /// [`WorkerScorer::recommend`] 会把这类工人视为不合格。
    pub fn score_worker(&self, task: &Task, worker: &Worker) -> Option<ScoreBreakdown> {
        let task_location = task.location_or(self.policy.default_task_location);
        self.score_at(task, task_location, worker)
    }

    /// 返回得分最高的工人；得分相同时取输入顺序靠前者
    pub fn recommend(&self, task: &Task, workers: &[Worker]) -> RecommendationResult {
        let task_location = task.location_or(self.policy.default_task_location);
        self.sink
            .analysis_started(task, workers.len(), task_location);

        let mut best: Option<(&Worker, f64)> = None;

        for worker in workers {
            let Some(breakdown) = self.score_at(task, task_location, worker) else {
                self.sink
                    .worker_skipped(worker, SkipReason::MissingRequiredSkill);
                continue;
            };
            self.sink.worker_scored(&breakdown);

            if !breakdown.total.is_finite() {
                warn!(
                    "工人 {} 的得分不是有限数 ({})，已排除",
                    worker.id, breakdown.total
                );
                self.sink.worker_skipped(worker, SkipReason::NonFiniteScore);
                continue;
            }

            if best.map_or(true, |(_, top)| breakdown.total > top) {
                best = Some((worker, breakdown.total));
            }
        }

        match best {
            Some((worker, score)) => {
                debug!("任务 {} 推荐工人: {} (得分: {:.3})", task.id, worker.id, score);
                RecommendationResult::Recommended {
                    worker_id: worker.id.clone(),
                    worker_name: worker.name.clone(),
                    score,
                }
            }
            None => {
                debug!("任务 {} 没有合格的工人", task.id);
                RecommendationResult::no_suitable_worker()
            }
        }
    }

    fn score_at(
        &self,
        task: &Task,
        task_location: Location,
        worker: &Worker,
    ) -> Option<ScoreBreakdown> {
        let skill_score = self.skill_score(task, worker)?;
        let fatigue_score = 1.0 - worker.fatigue_level;

        let (distance_score, distance) = match self.policy.distance_normalization {
            Some(normalization) => match worker.location {
                Some(location) => {
                    let distance = location.distance_to(&task_location);
                    let score = if distance.is_finite() {
                        (1.0 - distance / normalization).max(0.0)
                    } else {
                        f64::NAN
                    };
                    (Some(score), Some(distance))
                }
                // 没有位置信息的工人不获得距离分
                None => (Some(0.0), None),
            },
            None => (None, None),
        };

        let weights = &self.policy.weights;
        let total = skill_score * weights.skill
            + fatigue_score * weights.fatigue
            + distance_score.unwrap_or(0.0) * weights.distance;

        Some(ScoreBreakdown {
            worker_id: worker.id.clone(),
            worker_name: worker.name.clone(),
            skill_score,
            fatigue_score,
            distance_score,
            distance,
            total,
        })
    }

    fn skill_score(&self, task: &Task, worker: &Worker) -> Option<f64> {
        match task.required_skill_id.as_deref() {
            None => Some(1.0),
            Some(skill_id) => worker
                .find_skill(skill_id)
                .map(|ws| f64::from(ws.proficiency) / self.policy.proficiency_scale),
        }
    }
}
