use super::common::*;
use crate::workflows::interview::scorecards::{
    recommend, AggregationError, Dimension, DimensionWeights, Recommendation,
    ScorecardAggregator, WeightError, WEIGHT_SUM_TOLERANCE,
};

#[test]
fn recommendation_thresholds_cover_every_band() {
    let cases = [
        (10.0, Recommendation::StrongHire),
        (8.5, Recommendation::StrongHire),
        (8.49, Recommendation::Hire),
        (7.5, Recommendation::Hire),
        (7.49, Recommendation::SecondRound),
        (6.5, Recommendation::SecondRound),
        (6.49, Recommendation::Hold),
        (5.5, Recommendation::Hold),
        (5.49, Recommendation::NoHire),
        (0.0, Recommendation::NoHire),
    ];

    for (overall, expected) in cases {
        assert_eq!(
            recommend(overall),
            expected,
            "overall {overall} should map to {expected:?}"
        );
    }
}

#[test]
fn default_weights_sum_to_one() {
    let weights = DimensionWeights::default();
    assert!((weights.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE);
    assert!((weights.technical() - 0.5).abs() < f64::EPSILON);
    assert!((weights.behavioral() - 0.3).abs() < f64::EPSILON);
    assert!((weights.cultural() - 0.2).abs() < f64::EPSILON);
}

#[test]
fn weights_reject_bad_sums_and_negative_values() {
    match DimensionWeights::new(0.5, 0.3, 0.3) {
        Err(WeightError::Sum(sum)) => assert!((sum - 1.1).abs() < 1e-9),
        other => panic!("expected sum rejection, got {other:?}"),
    }

    match DimensionWeights::new(1.2, -0.1, -0.1) {
        Err(WeightError::Negative) => {}
        other => panic!("expected negative rejection, got {other:?}"),
    }

    assert!(DimensionWeights::new(0.5, 0.3, 0.2).is_ok());
}

#[test]
fn aggregate_computes_the_worked_panel_example() {
    let aggregator = ScorecardAggregator::default();
    let score = aggregator.aggregate(&panel()).expect("panel aggregates");

    assert_eq!(score.feedback_count, 3);
    assert!((score.technical_avg - 8.0).abs() < 1e-9);
    assert!((score.behavioral_avg - 8.0).abs() < 1e-9);
    assert!((score.cultural_avg - 8.667).abs() < 5e-4);
    assert!((score.overall - 8.133).abs() < 5e-4);
    assert_eq!(score.recommendation, Recommendation::Hire);
    assert_eq!(score.interview_id, interview());
}

#[test]
fn aggregate_breakdown_components_reconstruct_the_overall() {
    let aggregator = ScorecardAggregator::default();
    let score = aggregator.aggregate(&panel()).expect("panel aggregates");

    assert_eq!(score.components.len(), 3);
    let recombined: f64 = score
        .components
        .iter()
        .map(|component| component.weighted)
        .sum();
    assert!((recombined - score.overall).abs() < 1e-12);

    let technical = score
        .components
        .iter()
        .find(|component| component.dimension == Dimension::Technical)
        .expect("technical component present");
    assert!((technical.weight - 0.5).abs() < f64::EPSILON);
    assert!((technical.weighted - 4.0).abs() < 1e-9);
}

#[test]
fn aggregate_is_deterministic_and_order_independent() {
    let aggregator = ScorecardAggregator::default();
    let forward = panel();
    let mut reversed = panel();
    reversed.reverse();

    let first = aggregator.aggregate(&forward).expect("aggregates");
    let second = aggregator.aggregate(&forward).expect("aggregates");
    let shuffled = aggregator.aggregate(&reversed).expect("aggregates");

    assert_eq!(first, second);
    assert_eq!(first.overall.to_bits(), second.overall.to_bits());
    assert_eq!(first.overall.to_bits(), shuffled.overall.to_bits());
    assert_eq!(first.recommendation, shuffled.recommendation);
}

#[test]
fn aggregate_rejects_empty_input_instead_of_returning_nan() {
    let aggregator = ScorecardAggregator::default();

    match aggregator.aggregate(&[]) {
        Err(AggregationError::NoFeedback) => {}
        Ok(score) => panic!("empty input must not yield a numeric overall, got {score:?}"),
    }
}

#[test]
fn single_feedback_panel_aggregates_to_its_own_scores() {
    let aggregator = ScorecardAggregator::default();
    let one = vec![feedback("solo.reviewer", 6, 6, 6)];

    let score = aggregator.aggregate(&one).expect("single record aggregates");
    assert!((score.overall - 6.0).abs() < 1e-9);
    assert_eq!(score.recommendation, Recommendation::Hold);
}
