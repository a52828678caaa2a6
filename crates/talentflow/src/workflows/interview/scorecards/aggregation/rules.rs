use super::super::domain::{Dimension, InterviewFeedback};
use super::weights::DimensionWeights;
use super::DimensionBreakdown;

pub(crate) struct DimensionAverages {
    pub technical: f64,
    pub behavioral: f64,
    pub cultural: f64,
}

impl DimensionAverages {
    pub(crate) fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Technical => self.technical,
            Dimension::Behavioral => self.behavioral,
            Dimension::Cultural => self.cultural,
        }
    }
}

/// Arithmetic mean per dimension. Callers guarantee `feedbacks` is non-empty;
/// the engine rejects empty input before reaching this point.
pub(crate) fn average_ratings(feedbacks: &[InterviewFeedback]) -> DimensionAverages {
    let count = feedbacks.len() as f64;
    let mut totals = [0.0_f64; 3];

    for feedback in feedbacks {
        for (slot, dimension) in Dimension::ALL.iter().enumerate() {
            totals[slot] += f64::from(feedback.rating(*dimension).score.value());
        }
    }

    DimensionAverages {
        technical: totals[0] / count,
        behavioral: totals[1] / count,
        cultural: totals[2] / count,
    }
}

/// Weighted sum of the averages, with a per-dimension breakdown so the
/// composite score can be audited.
pub(crate) fn weighted_overall(
    averages: &DimensionAverages,
    weights: &DimensionWeights,
) -> (f64, Vec<DimensionBreakdown>) {
    let mut overall = 0.0;
    let mut components = Vec::with_capacity(Dimension::ALL.len());

    for dimension in Dimension::ALL {
        let average = averages.get(dimension);
        let weight = weights.get(dimension);
        let weighted = average * weight;
        overall += weighted;

        components.push(DimensionBreakdown {
            dimension,
            average,
            weight,
            weighted,
        });
    }

    (overall, components)
}
