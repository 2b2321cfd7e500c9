pub mod calculator;
pub mod weights;

pub use calculator::{
    breakdown, round_score, score, ScoreBreakdown, ScoredRegion, ScoringFailure, SCORE_PRECISION,
};
pub use weights::{WeightSet, DEFAULT_RAW_WEIGHTS, WEIGHT_SUM_TOLERANCE};
