//! Type definitions for the API
//!
//! Wire-level request/response types. Field names here are part of the
//! contract with existing callers and must not be renamed.

pub mod recommendation;

// Re-export commonly used types
pub use recommendation::{
    RecommendQuery, RecommendationRequest, RecommendationResponse, SkillPayload, TaskPayload,
    WorkerPayload, WorkerSkillPayload,
};
