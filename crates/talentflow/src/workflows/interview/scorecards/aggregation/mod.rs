mod policy;
mod rules;
mod weights;

pub use policy::{recommend, Recommendation};
pub use weights::{DimensionWeights, WeightError, WEIGHT_SUM_TOLERANCE};

use super::domain::{Dimension, InterviewFeedback, InterviewId};
use serde::{Deserialize, Serialize};

/// Stateless engine that turns a set of submitted feedback records into one
/// defensible hire/no-hire signal.
pub struct ScorecardAggregator {
    weights: DimensionWeights,
}

impl ScorecardAggregator {
    pub fn new(weights: DimensionWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &DimensionWeights {
        &self.weights
    }

    /// Compute per-dimension averages, the weighted overall score, and the
    /// derived recommendation. Deterministic and order-independent for a
    /// fixed input set. Empty input is an explicit error rather than a NaN.
    pub fn aggregate(
        &self,
        feedbacks: &[InterviewFeedback],
    ) -> Result<AggregateScore, AggregationError> {
        let first = feedbacks.first().ok_or(AggregationError::NoFeedback)?;

        let averages = rules::average_ratings(feedbacks);
        let (overall, components) = rules::weighted_overall(&averages, &self.weights);

        Ok(AggregateScore {
            interview_id: first.interview_id.clone(),
            feedback_count: feedbacks.len(),
            technical_avg: averages.technical,
            behavioral_avg: averages.behavioral,
            cultural_avg: averages.cultural,
            overall,
            recommendation: policy::recommend(overall),
            components,
        })
    }
}

impl Default for ScorecardAggregator {
    fn default() -> Self {
        Self::new(DimensionWeights::default())
    }
}

/// Raised instead of letting an empty input set divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AggregationError {
    #[error("no submitted feedback to aggregate")]
    NoFeedback,
}

/// Discrete contribution of one dimension to the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionBreakdown {
    pub dimension: Dimension,
    pub average: f64,
    pub weight: f64,
    pub weighted: f64,
}

/// Derived result of aggregating an interview's feedback. Never persisted;
/// recomputed on demand from the current set of submitted records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateScore {
    pub interview_id: InterviewId,
    pub feedback_count: usize,
    pub technical_avg: f64,
    pub behavioral_avg: f64,
    pub cultural_avg: f64,
    pub overall: f64,
    pub recommendation: Recommendation,
    pub components: Vec<DimensionBreakdown>,
}
