use chrono::NaiveDateTime;
use serde::Serialize;

use super::domain::{
    Dimension, DimensionRating, InterviewFeedback, InterviewId, ScorecardSubmission,
};

/// Validation errors raised while turning a submission into stored feedback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScorecardViolation {
    #[error("extreme ratings require a justification comment for: {}", format_dimensions(.missing))]
    MissingJustification { missing: Vec<Dimension> },
    #[error("interviewer identifier is blank")]
    BlankInterviewer,
}

fn format_dimensions(dimensions: &[Dimension]) -> String {
    dimensions
        .iter()
        .map(|dimension| dimension.wire_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Structured result of the extreme-rating justification check. Pure data so
/// the caller decides whether to block submission and what to surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub missing_justifications: Vec<Dimension>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing_justifications.is_empty()
    }
}

/// Checks each dimension independently: an extreme score whose comment is
/// empty or whitespace-only records that dimension as missing justification.
pub fn validate_submission(submission: &ScorecardSubmission) -> ValidationReport {
    let missing = Dimension::ALL
        .iter()
        .copied()
        .filter(|dimension| {
            submission.score(*dimension).is_extreme()
                && submission.comment(*dimension).trim().is_empty()
        })
        .collect();

    ValidationReport {
        missing_justifications: missing,
    }
}

/// Guard responsible for producing accepted `InterviewFeedback` records.
#[derive(Debug, Clone, Default)]
pub struct ScorecardGuard;

impl ScorecardGuard {
    /// Convert an inbound submission into an immutable feedback record,
    /// rejecting unjustified extreme ratings.
    pub fn feedback_from_submission(
        &self,
        interview_id: InterviewId,
        submission: ScorecardSubmission,
        submitted_at: NaiveDateTime,
    ) -> Result<InterviewFeedback, ScorecardViolation> {
        if submission.interviewer_id.0.trim().is_empty() {
            return Err(ScorecardViolation::BlankInterviewer);
        }

        let report = validate_submission(&submission);
        if !report.is_valid() {
            return Err(ScorecardViolation::MissingJustification {
                missing: report.missing_justifications,
            });
        }

        Ok(InterviewFeedback {
            interview_id,
            interviewer_id: submission.interviewer_id,
            technical: DimensionRating::new(submission.technical, submission.technical_comments),
            behavioral: DimensionRating::new(submission.behavioral, submission.behavioral_comments),
            cultural: DimensionRating::new(submission.culture, submission.culture_comments),
            overall_comment: submission.overall_comments,
            submitted_at,
        })
    }
}
