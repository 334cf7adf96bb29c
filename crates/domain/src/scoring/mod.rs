pub mod policy;
pub mod scorer;
pub mod trace;

pub use policy::{PolicyPreset, ScoringPolicy, ScoringWeights, DEFAULT_DISTANCE_NORMALIZATION};
pub use scorer::WorkerScorer;
pub use trace::{NoopScoreSink, ScoreBreakdown, ScoreTraceSink, SkipReason, TracingScoreSink};
