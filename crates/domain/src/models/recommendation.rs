/// 未找到合格工人时返回的提示信息
pub const NO_SUITABLE_WORKER_MESSAGE: &str = "No suitable worker found.";

/// 推荐结果
///
/// 没有合格工人是正常结果，不是错误。
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationResult {
    Recommended {
        worker_id: String,
        worker_name: String,
        score: f64,
    },
    NoSuitableWorker {
        message: String,
    },
}

impl RecommendationResult {
    pub fn no_suitable_worker() -> Self {
        Self::NoSuitableWorker {
            message: NO_SUITABLE_WORKER_MESSAGE.to_string(),
        }
    }

    pub fn worker_id(&self) -> Option<&str> {
        match self {
            Self::Recommended { worker_id, .. } => Some(worker_id),
            Self::NoSuitableWorker { .. } => None,
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Recommended { score, .. } => Some(*score),
            Self::NoSuitableWorker { .. } => None,
        }
    }

    pub fn is_recommended(&self) -> bool {
        matches!(self, Self::Recommended { .. })
    }
}
