use serde::{Deserialize, Serialize};

/// Categorical hiring recommendation derived from the weighted overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongHire,
    Hire,
    SecondRound,
    Hold,
    NoHire,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::StrongHire => "Strong Hire",
            Recommendation::Hire => "Hire",
            Recommendation::SecondRound => "Second Round",
            Recommendation::Hold => "Hold",
            Recommendation::NoHire => "No Hire",
        }
    }
}

/// Maps the continuous overall score to a recommendation. Thresholds are
/// evaluated from highest to lowest; the first match wins.
pub fn recommend(overall: f64) -> Recommendation {
    if overall >= 8.5 {
        Recommendation::StrongHire
    } else if overall >= 7.5 {
        Recommendation::Hire
    } else if overall >= 6.5 {
        Recommendation::SecondRound
    } else if overall >= 5.5 {
        Recommendation::Hold
    } else {
        Recommendation::NoHire
    }
}
