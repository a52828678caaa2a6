use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::domain::{InterviewFeedback, InterviewId, InterviewerId};

/// Storage abstraction so the service module can be exercised in isolation.
/// The REST-backed collaborator implements this; the aggregator only ever
/// sees the in-memory record set it returns.
pub trait FeedbackRepository: Send + Sync {
    /// Store a newly accepted scorecard. One record per interviewer per
    /// interview; a second submission from the same interviewer conflicts.
    fn insert(&self, feedback: InterviewFeedback) -> Result<InterviewFeedback, RepositoryError>;
    fn fetch(
        &self,
        interview_id: &InterviewId,
        interviewer_id: &InterviewerId,
    ) -> Result<Option<InterviewFeedback>, RepositoryError>;
    fn list(&self, interview_id: &InterviewId) -> Result<Vec<InterviewFeedback>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("interviewer already submitted a scorecard for this interview")]
    Conflict,
    #[error("scorecard not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for the live notification stream (the UI's push channel).
/// The core only hands over already-formed payloads; delivery is external.
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notification: ScorecardNotification) -> Result<(), NotificationError>;
}

/// Payload pushed when a scorecard is accepted, so routes/tests can assert
/// the integration boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorecardNotification {
    pub event: String,
    pub interview_id: InterviewId,
    pub interviewer_id: InterviewerId,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized acknowledgement returned to a submitting interviewer.
#[derive(Debug, Clone, Serialize)]
pub struct ScorecardReceipt {
    pub interview_id: InterviewId,
    pub interviewer_id: InterviewerId,
    pub status: &'static str,
    pub submitted_at: NaiveDateTime,
}

impl ScorecardReceipt {
    pub fn for_feedback(feedback: &InterviewFeedback) -> Self {
        Self {
            interview_id: feedback.interview_id.clone(),
            interviewer_id: feedback.interviewer_id.clone(),
            status: "submitted",
            submitted_at: feedback.submitted_at,
        }
    }
}
