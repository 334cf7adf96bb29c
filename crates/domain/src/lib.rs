//! # Axion Domain
//!
//! 工人推荐的领域模型与评分逻辑。
//!
//! 评分是纯函数：给定一个任务和候选工人列表，按 [`ScoringPolicy`]
//! 计算每个合格工人的加权得分并返回得分最高者。整个过程不持有共享可变状态，
//! 可在多个请求间并发调用。

pub mod models;
pub mod scoring;
pub mod value_objects;

pub use axion_core::{RecommenderError, RecommenderResult};
pub use models::*;
pub use scoring::*;
pub use value_objects::*;
