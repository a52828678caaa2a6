use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::aggregation::{
    AggregateScore, AggregationError, DimensionWeights, ScorecardAggregator,
};
use super::domain::{InterviewFeedback, InterviewId, InterviewerId, ScorecardSubmission};
use super::repository::{
    FeedbackRepository, NotificationError, NotificationPublisher, RepositoryError,
    ScorecardNotification,
};
use super::scoreboard::InterviewScoreboard;
use super::validation::{ScorecardGuard, ScorecardViolation};

/// Service composing the justification guard, feedback repository,
/// notification stream, and aggregation engine.
pub struct ScorecardService<R, N> {
    guard: ScorecardGuard,
    repository: Arc<R>,
    notifier: Arc<N>,
    aggregator: ScorecardAggregator,
}

impl<R, N> ScorecardService<R, N>
where
    R: FeedbackRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>, weights: DimensionWeights) -> Self {
        Self {
            guard: ScorecardGuard,
            repository,
            notifier,
            aggregator: ScorecardAggregator::new(weights),
        }
    }

    pub fn weights(&self) -> &DimensionWeights {
        self.aggregator.weights()
    }

    /// Validate and store one interviewer's scorecard, then push a
    /// notification for the live feed. A validation failure blocks only this
    /// submission and never touches already-submitted records.
    pub fn submit(
        &self,
        interview_id: InterviewId,
        submission: ScorecardSubmission,
    ) -> Result<InterviewFeedback, ScorecardServiceError> {
        let feedback = self.guard.feedback_from_submission(
            interview_id,
            submission,
            Utc::now().naive_utc(),
        )?;

        let stored = self.repository.insert(feedback)?;
        info!(
            interview = %stored.interview_id.0,
            interviewer = %stored.interviewer_id.0,
            "scorecard submitted"
        );

        let mut details = BTreeMap::new();
        details.insert("status".to_string(), "submitted".to_string());
        self.notifier.publish(ScorecardNotification {
            event: "scorecard_submitted".to_string(),
            interview_id: stored.interview_id.clone(),
            interviewer_id: stored.interviewer_id.clone(),
            details,
        })?;

        Ok(stored)
    }

    /// Recompute the aggregate over whatever feedback is currently submitted.
    /// Callers needing the raw score should use this; the HTTP layer prefers
    /// `scoreboard`, which maps the empty set to a sentinel view.
    pub fn aggregate(
        &self,
        interview_id: &InterviewId,
    ) -> Result<AggregateScore, ScorecardServiceError> {
        let feedbacks = self.repository.list(interview_id)?;
        Ok(self.aggregator.aggregate(&feedbacks)?)
    }

    pub fn scoreboard(
        &self,
        interview_id: &InterviewId,
    ) -> Result<InterviewScoreboard, ScorecardServiceError> {
        let feedbacks = self.repository.list(interview_id)?;
        match self.aggregator.aggregate(&feedbacks) {
            Ok(score) => Ok(InterviewScoreboard::evaluated(score, &feedbacks)),
            Err(AggregationError::NoFeedback) => {
                Ok(InterviewScoreboard::not_yet_evaluated(interview_id.clone()))
            }
        }
    }

    /// Fetch one interviewer's submitted scorecard.
    pub fn feedback(
        &self,
        interview_id: &InterviewId,
        interviewer_id: &InterviewerId,
    ) -> Result<InterviewFeedback, ScorecardServiceError> {
        let feedback = self
            .repository
            .fetch(interview_id, interviewer_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(feedback)
    }
}

/// Error raised by the scorecard service.
#[derive(Debug, thiserror::Error)]
pub enum ScorecardServiceError {
    #[error(transparent)]
    Scorecard(#[from] ScorecardViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}
