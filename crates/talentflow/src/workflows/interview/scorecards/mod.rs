//! Interview scorecard intake, validation, and decision aggregation.
//!
//! One interviewer submits one scorecard per interview; the aggregate score
//! and hiring recommendation are pure functions of whatever records are
//! currently submitted and are recomputed every time they are displayed.

pub(crate) mod aggregation;
pub mod domain;
pub mod draft;
pub mod repository;
pub mod router;
pub mod scoreboard;
pub mod service;
pub(crate) mod validation;

#[cfg(test)]
mod tests;

pub use aggregation::{
    recommend, AggregateScore, AggregationError, DimensionBreakdown, DimensionWeights,
    Recommendation, ScorecardAggregator, WeightError, WEIGHT_SUM_TOLERANCE,
};
pub use domain::{
    Dimension, DimensionRating, InterviewFeedback, InterviewId, InterviewerId, Score,
    ScoreOutOfRange, ScorecardSubmission,
};
pub use draft::{DraftError, DraftState, ScorecardDraft};
pub use repository::{
    FeedbackRepository, NotificationError, NotificationPublisher, RepositoryError,
    ScorecardNotification, ScorecardReceipt,
};
pub use router::scorecard_router;
pub use scoreboard::{
    AggregateScoreView, DimensionAverageEntry, InterviewScoreboard, PanelistEntry,
};
pub use service::{ScorecardService, ScorecardServiceError};
pub use validation::{validate_submission, ScorecardGuard, ScorecardViolation, ValidationReport};
