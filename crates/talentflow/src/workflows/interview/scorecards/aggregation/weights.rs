use serde::{Deserialize, Serialize};

use super::super::domain::Dimension;

/// Tolerance applied when checking that weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

const DEFAULT_TECHNICAL: f64 = 0.5;
const DEFAULT_BEHAVIORAL: f64 = 0.3;
const DEFAULT_CULTURAL: f64 = 0.2;

/// Process-wide weighting applied to the per-dimension averages. Fields stay
/// private so every instance satisfies the sum-to-one invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDimensionWeights")]
pub struct DimensionWeights {
    technical: f64,
    behavioral: f64,
    cultural: f64,
}

impl DimensionWeights {
    pub fn new(technical: f64, behavioral: f64, cultural: f64) -> Result<Self, WeightError> {
        if [technical, behavioral, cultural]
            .iter()
            .any(|weight| !weight.is_finite() || *weight < 0.0)
        {
            return Err(WeightError::Negative);
        }

        let candidate = Self {
            technical,
            behavioral,
            cultural,
        };
        let sum = candidate.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightError::Sum(sum));
        }

        Ok(candidate)
    }

    pub fn sum(&self) -> f64 {
        self.technical + self.behavioral + self.cultural
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Technical => self.technical,
            Dimension::Behavioral => self.behavioral,
            Dimension::Cultural => self.cultural,
        }
    }

    pub fn technical(&self) -> f64 {
        self.technical
    }

    pub fn behavioral(&self) -> f64 {
        self.behavioral
    }

    pub fn cultural(&self) -> f64 {
        self.cultural
    }
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            technical: DEFAULT_TECHNICAL,
            behavioral: DEFAULT_BEHAVIORAL,
            cultural: DEFAULT_CULTURAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum WeightError {
    #[error("dimension weights must sum to 1.0 (got {0:.6})")]
    Sum(f64),
    #[error("dimension weights must be finite and non-negative")]
    Negative,
}

#[derive(Debug, Deserialize)]
struct RawDimensionWeights {
    technical: f64,
    behavioral: f64,
    cultural: f64,
}

impl TryFrom<RawDimensionWeights> for DimensionWeights {
    type Error = WeightError;

    fn try_from(raw: RawDimensionWeights) -> Result<Self, Self::Error> {
        Self::new(raw.technical, raw.behavioral, raw.cultural)
    }
}
