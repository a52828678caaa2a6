//! Import of panel-sheet spreadsheet exports.
//!
//! Interview panels sometimes capture ratings in a shared spreadsheet before
//! they reach the tracker. The importer turns such a CSV export into
//! validated `InterviewFeedback` records that feed the same aggregation path
//! as scorecards submitted over HTTP.

mod normalizer;
mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::workflows::interview::scorecards::{
    InterviewFeedback, InterviewId, InterviewerId, Score, ScoreOutOfRange, ScorecardGuard,
    ScorecardSubmission, ScorecardViolation,
};

#[derive(Debug)]
pub enum PanelSheetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Rating {
        interviewer: String,
        source: ScoreOutOfRange,
    },
    Scorecard {
        interviewer: String,
        source: ScorecardViolation,
    },
}

impl std::fmt::Display for PanelSheetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelSheetImportError::Io(err) => {
                write!(f, "failed to read panel sheet export: {}", err)
            }
            PanelSheetImportError::Csv(err) => write!(f, "invalid panel sheet CSV data: {}", err),
            PanelSheetImportError::Rating { interviewer, source } => {
                write!(f, "invalid rating for '{}': {}", interviewer, source)
            }
            PanelSheetImportError::Scorecard { interviewer, source } => {
                write!(f, "scorecard for '{}' rejected: {}", interviewer, source)
            }
        }
    }
}

impl std::error::Error for PanelSheetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PanelSheetImportError::Io(err) => Some(err),
            PanelSheetImportError::Csv(err) => Some(err),
            PanelSheetImportError::Rating { source, .. } => Some(source),
            PanelSheetImportError::Scorecard { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for PanelSheetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for PanelSheetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct PanelSheetImporter;

impl PanelSheetImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        interview_id: &InterviewId,
        imported_at: NaiveDateTime,
    ) -> Result<Vec<InterviewFeedback>, PanelSheetImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, interview_id, imported_at)
    }

    /// Parse, validate, and convert each panel row. Duplicate interviewer
    /// rows keep the first occurrence; rows with a blank interviewer cell
    /// are skipped. Unjustified extreme ratings abort the import.
    pub fn from_reader<R: Read>(
        reader: R,
        interview_id: &InterviewId,
        imported_at: NaiveDateTime,
    ) -> Result<Vec<InterviewFeedback>, PanelSheetImportError> {
        let guard = ScorecardGuard;
        let mut seen: HashSet<String> = HashSet::new();
        let mut feedbacks = Vec::new();

        for record in parser::parse_records(reader)? {
            if record.interviewer.is_empty() {
                continue;
            }
            if !seen.insert(record.interviewer.clone()) {
                continue;
            }

            let rating = |value: u8| {
                Score::new(value).map_err(|source| PanelSheetImportError::Rating {
                    interviewer: record.interviewer.clone(),
                    source,
                })
            };

            let submission = ScorecardSubmission {
                interviewer_id: InterviewerId(record.interviewer.clone()),
                technical: rating(record.technical)?,
                behavioral: rating(record.behavioral)?,
                culture: rating(record.culture)?,
                technical_comments: record.technical_comments,
                behavioral_comments: record.behavioral_comments,
                culture_comments: record.culture_comments,
                overall_comments: None,
            };

            let submitted_at = record.submitted_at.unwrap_or(imported_at);
            let feedback = guard
                .feedback_from_submission(interview_id.clone(), submission, submitted_at)
                .map_err(|source| PanelSheetImportError::Scorecard {
                    interviewer: record.interviewer.clone(),
                    source,
                })?;

            feedbacks.push(feedback);
        }

        Ok(feedbacks)
    }
}
