use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for the interview a scorecard belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterviewId(pub String);

/// Identifier wrapper for the interviewer who filed a scorecard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterviewerId(pub String);

/// The three fixed rating dimensions every scorecard covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Technical,
    Behavioral,
    Cultural,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::Technical,
        Dimension::Behavioral,
        Dimension::Cultural,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Technical => "Technical",
            Dimension::Behavioral => "Behavioral",
            Dimension::Cultural => "Cultural Fit",
        }
    }

    /// Field name used on the REST boundary and in panel-sheet exports.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Dimension::Technical => "technical",
            Dimension::Behavioral => "behavioral",
            Dimension::Cultural => "culture",
        }
    }
}

/// Rating on the 1-10 scale. Out-of-range values are rejected at the parse
/// boundary so downstream validation and aggregation only ever see sane input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self, ScoreOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoreOutOfRange(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// An extreme rating (<= 2 or >= 9, inclusive on both ends) requires a
    /// justification comment before the scorecard can be submitted.
    pub const fn is_extreme(self) -> bool {
        self.0 <= 2 || self.0 >= 9
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("score {0} is outside the 1-10 rating scale")]
pub struct ScoreOutOfRange(pub u8);

/// One dimension's rating with its free-text comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionRating {
    pub score: Score,
    pub comment: String,
}

impl DimensionRating {
    pub fn new(score: Score, comment: impl Into<String>) -> Self {
        Self {
            score,
            comment: comment.into(),
        }
    }

}

/// An interviewer's submitted scorecard for one interview. Immutable once
/// accepted; the aggregate is always recomputed from the current set of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewFeedback {
    pub interview_id: InterviewId,
    pub interviewer_id: InterviewerId,
    pub technical: DimensionRating,
    pub behavioral: DimensionRating,
    pub cultural: DimensionRating,
    pub overall_comment: Option<String>,
    pub submitted_at: NaiveDateTime,
}

impl InterviewFeedback {
    pub fn rating(&self, dimension: Dimension) -> &DimensionRating {
        match dimension {
            Dimension::Technical => &self.technical,
            Dimension::Behavioral => &self.behavioral,
            Dimension::Cultural => &self.cultural,
        }
    }

    /// True when any dimension carries an extreme rating.
    pub fn has_extreme_rating(&self) -> bool {
        Dimension::ALL
            .iter()
            .any(|dimension| self.rating(*dimension).score.is_extreme())
    }
}

/// Wire-shape scorecard draft as submitted by clients. Field names follow the
/// REST boundary contract (`technical`, `behavioral`, `culture`, `*Comments`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardSubmission {
    pub interviewer_id: InterviewerId,
    pub technical: Score,
    pub behavioral: Score,
    pub culture: Score,
    #[serde(default)]
    pub technical_comments: String,
    #[serde(default)]
    pub behavioral_comments: String,
    #[serde(default)]
    pub culture_comments: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_comments: Option<String>,
}

impl ScorecardSubmission {
    pub fn score(&self, dimension: Dimension) -> Score {
        match dimension {
            Dimension::Technical => self.technical,
            Dimension::Behavioral => self.behavioral,
            Dimension::Cultural => self.culture,
        }
    }

    pub fn comment(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Technical => &self.technical_comments,
            Dimension::Behavioral => &self.behavioral_comments,
            Dimension::Cultural => &self.culture_comments,
        }
    }
}
