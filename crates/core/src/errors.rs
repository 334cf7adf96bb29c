use thiserror::Error;

/// 推荐服务错误类型定义
///
/// 两种错误都源于调用方或部署提供的评分参数，对应4xx响应。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecommenderError {
    #[error("无效的评分策略: {0}")]
    InvalidPolicy(String),

    #[error("未知的评分预设: {0}")]
    UnknownPreset(String),
}

impl RecommenderError {
    pub fn invalid_policy<S: Into<String>>(msg: S) -> Self {
        Self::InvalidPolicy(msg.into())
    }
    pub fn unknown_preset<S: Into<String>>(name: S) -> Self {
        Self::UnknownPreset(name.into())
    }

    pub fn user_message(&self) -> &str {
        match self {
            RecommenderError::InvalidPolicy(_) => "评分策略配置有误",
            RecommenderError::UnknownPreset(_) => "请求的评分预设不存在",
        }
    }
}
