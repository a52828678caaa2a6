use super::domain::{Dimension, InterviewerId, Score, ScorecardSubmission};
use super::validation::{validate_submission, ValidationReport};

/// Submission lifecycle for a single interviewer's scorecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Editing,
    ValidationFailed,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("scorecard already submitted")]
    AlreadySubmitted,
    #[error("{} dimension(s) still unscored", .missing.len())]
    IncompleteScores { missing: Vec<Dimension> },
    #[error(
        "{} extreme rating(s) missing a justification comment",
        .report.missing_justifications.len()
    )]
    Rejected { report: ValidationReport },
}

/// Local, serializable edit state for one scorecard. Scores and comments stay
/// mutable until a submit attempt passes validation; `Submitted` is terminal.
#[derive(Debug, Clone)]
pub struct ScorecardDraft {
    interviewer_id: InterviewerId,
    scores: [Option<Score>; 3],
    comments: [String; 3],
    overall_comments: Option<String>,
    state: DraftState,
}

const fn slot(dimension: Dimension) -> usize {
    match dimension {
        Dimension::Technical => 0,
        Dimension::Behavioral => 1,
        Dimension::Cultural => 2,
    }
}

impl ScorecardDraft {
    pub fn new(interviewer_id: InterviewerId) -> Self {
        Self {
            interviewer_id,
            scores: [None; 3],
            comments: [String::new(), String::new(), String::new()],
            overall_comments: None,
            state: DraftState::Editing,
        }
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub fn score(&self, dimension: Dimension) -> Option<Score> {
        self.scores[slot(dimension)]
    }

    /// Record a rating edit. Returns true when the new score is extreme so
    /// the caller can mark the matching comment box as required. Any edit
    /// moves a failed draft back to `Editing`; submitted drafts are frozen.
    pub fn set_score(&mut self, dimension: Dimension, score: Score) -> bool {
        if self.state != DraftState::Submitted {
            self.scores[slot(dimension)] = Some(score);
            self.state = DraftState::Editing;
        }
        score.is_extreme()
    }

    pub fn set_comment(&mut self, dimension: Dimension, comment: impl Into<String>) {
        if self.state != DraftState::Submitted {
            self.comments[slot(dimension)] = comment.into();
            self.state = DraftState::Editing;
        }
    }

    pub fn set_overall_comment(&mut self, comment: impl Into<String>) {
        if self.state != DraftState::Submitted {
            self.overall_comments = Some(comment.into());
            self.state = DraftState::Editing;
        }
    }

    /// Attempt submission. A failed justification check leaves the draft in
    /// `ValidationFailed` without touching any already-submitted records.
    pub fn submit(&mut self) -> Result<ScorecardSubmission, DraftError> {
        if self.state == DraftState::Submitted {
            return Err(DraftError::AlreadySubmitted);
        }

        let (technical, behavioral, culture) = match (
            self.scores[slot(Dimension::Technical)],
            self.scores[slot(Dimension::Behavioral)],
            self.scores[slot(Dimension::Cultural)],
        ) {
            (Some(technical), Some(behavioral), Some(culture)) => (technical, behavioral, culture),
            _ => {
                let missing = Dimension::ALL
                    .iter()
                    .copied()
                    .filter(|dimension| self.scores[slot(*dimension)].is_none())
                    .collect();
                self.state = DraftState::ValidationFailed;
                return Err(DraftError::IncompleteScores { missing });
            }
        };

        let submission = ScorecardSubmission {
            interviewer_id: self.interviewer_id.clone(),
            technical,
            behavioral,
            culture,
            technical_comments: self.comments[slot(Dimension::Technical)].clone(),
            behavioral_comments: self.comments[slot(Dimension::Behavioral)].clone(),
            culture_comments: self.comments[slot(Dimension::Cultural)].clone(),
            overall_comments: self.overall_comments.clone(),
        };

        let report = validate_submission(&submission);
        if !report.is_valid() {
            self.state = DraftState::ValidationFailed;
            return Err(DraftError::Rejected { report });
        }

        self.state = DraftState::Submitted;
        Ok(submission)
    }
}
