use chrono::NaiveDateTime;
use serde::Serialize;

use super::aggregation::{AggregateScore, Recommendation};
use super::domain::{Dimension, InterviewFeedback, InterviewId, InterviewerId};

#[derive(Debug, Clone, Serialize)]
pub struct DimensionAverageEntry {
    pub dimension: Dimension,
    pub dimension_label: &'static str,
    pub average: f64,
    pub weight: f64,
    pub weighted: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelistEntry {
    pub interviewer_id: InterviewerId,
    pub technical: u8,
    pub behavioral: u8,
    pub culture: u8,
    pub has_extreme_rating: bool,
    pub submitted_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateScoreView {
    pub overall: f64,
    pub recommendation: Recommendation,
    pub recommendation_label: &'static str,
    pub dimensions: Vec<DimensionAverageEntry>,
}

/// Serializable scoreboard for one interview, shared by the HTTP layer and
/// the CLI renderer. An interview with no submitted feedback yet carries the
/// `not_yet_evaluated` sentinel instead of a numeric score.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewScoreboard {
    pub interview_id: InterviewId,
    pub status: &'static str,
    pub feedback_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<AggregateScoreView>,
    pub panel: Vec<PanelistEntry>,
}

impl InterviewScoreboard {
    pub const EVALUATED: &'static str = "evaluated";
    pub const NOT_YET_EVALUATED: &'static str = "not_yet_evaluated";

    pub fn evaluated(score: AggregateScore, feedbacks: &[InterviewFeedback]) -> Self {
        let dimensions = score
            .components
            .iter()
            .map(|component| DimensionAverageEntry {
                dimension: component.dimension,
                dimension_label: component.dimension.label(),
                average: component.average,
                weight: component.weight,
                weighted: component.weighted,
            })
            .collect();

        Self {
            interview_id: score.interview_id.clone(),
            status: Self::EVALUATED,
            feedback_count: score.feedback_count,
            score: Some(AggregateScoreView {
                overall: score.overall,
                recommendation: score.recommendation,
                recommendation_label: score.recommendation.label(),
                dimensions,
            }),
            panel: feedbacks.iter().map(PanelistEntry::for_feedback).collect(),
        }
    }

    pub fn not_yet_evaluated(interview_id: InterviewId) -> Self {
        Self {
            interview_id,
            status: Self::NOT_YET_EVALUATED,
            feedback_count: 0,
            score: None,
            panel: Vec::new(),
        }
    }
}

impl PanelistEntry {
    fn for_feedback(feedback: &InterviewFeedback) -> Self {
        Self {
            interviewer_id: feedback.interviewer_id.clone(),
            technical: feedback.rating(Dimension::Technical).score.value(),
            behavioral: feedback.rating(Dimension::Behavioral).score.value(),
            culture: feedback.rating(Dimension::Cultural).score.value(),
            has_extreme_rating: feedback.has_extreme_rating(),
            submitted_at: feedback.submitted_at,
        }
    }
}
