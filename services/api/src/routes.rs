use std::io::Cursor;
use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::json;
use talentflow::error::AppError;
use talentflow::workflows::interview::scorecards::{
    scorecard_router, AggregationError, DimensionWeights, FeedbackRepository, InterviewId,
    InterviewScoreboard, NotificationPublisher, ScorecardAggregator, ScorecardService,
};
use talentflow::workflows::panelsheet::PanelSheetImporter;

use crate::infra::{deserialize_optional_date, AppState};

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreboardPreviewRequest {
    pub(crate) interview_id: String,
    pub(crate) panel_csv: String,
    #[serde(default)]
    pub(crate) weights: Option<DimensionWeights>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) imported_on: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreboardPreviewResponse {
    pub(crate) imported_on: NaiveDate,
    pub(crate) scoreboard: InterviewScoreboard,
}

pub(crate) fn with_scorecard_routes<R, N>(service: Arc<ScorecardService<R, N>>) -> axum::Router
where
    R: FeedbackRepository + 'static,
    N: NotificationPublisher + 'static,
{
    scorecard_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/interviews/scoreboard/preview",
            axum::routing::post(scoreboard_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless scoreboard preview over an uploaded panel-sheet CSV. Nothing is
/// persisted; hiring managers use this to sanity-check a sheet before the
/// records are filed.
pub(crate) async fn scoreboard_preview_endpoint(
    Json(payload): Json<ScoreboardPreviewRequest>,
) -> Result<Json<ScoreboardPreviewResponse>, AppError> {
    let ScoreboardPreviewRequest {
        interview_id,
        panel_csv,
        weights,
        imported_on,
    } = payload;

    let interview_id = InterviewId(interview_id);
    let imported_on = imported_on.unwrap_or_else(|| Local::now().date_naive());
    let imported_at = imported_on.and_time(NaiveTime::MIN);

    let reader = Cursor::new(panel_csv.into_bytes());
    let feedbacks = PanelSheetImporter::from_reader(reader, &interview_id, imported_at)?;

    let aggregator = ScorecardAggregator::new(weights.unwrap_or_default());
    let scoreboard = match aggregator.aggregate(&feedbacks) {
        Ok(score) => InterviewScoreboard::evaluated(score, &feedbacks),
        Err(AggregationError::NoFeedback) => InterviewScoreboard::not_yet_evaluated(interview_id),
    };

    Ok(Json(ScoreboardPreviewResponse {
        imported_on,
        scoreboard,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use talentflow::workflows::interview::scorecards::Recommendation;

    const HEADER: &str = "Interviewer,Technical,Behavioral,Culture,Technical Comments,Behavioral Comments,Culture Comments,Submitted At\n";

    fn panel_csv() -> String {
        format!(
            "{HEADER}\
Priya Raman,8,7,9,,,Culture add across every loop,2026-03-02T10:00:00Z\n\
Lin Chen,9,8,8,Exceptional systems depth,,,2026-03-02T11:30:00Z\n\
Sam Okafor,7,9,9,,Crisp ownership examples,Team lift evident,2026-03-02T12:00:00Z\n"
        )
    }

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
    }

    #[tokio::test]
    async fn preview_endpoint_aggregates_an_uploaded_sheet() {
        let request = ScoreboardPreviewRequest {
            interview_id: "int-471".to_string(),
            panel_csv: panel_csv(),
            weights: None,
            imported_on: Some(sample_date()),
        };

        let Json(body) = scoreboard_preview_endpoint(Json(request))
            .await
            .expect("preview builds");

        assert_eq!(body.imported_on, sample_date());
        assert_eq!(body.scoreboard.status, InterviewScoreboard::EVALUATED);
        assert_eq!(body.scoreboard.feedback_count, 3);
        let score = body.scoreboard.score.expect("aggregate present");
        assert_eq!(score.recommendation, Recommendation::Hire);
        assert!((score.overall - 8.133).abs() < 5e-4);
    }

    #[tokio::test]
    async fn preview_endpoint_honors_weight_overrides() {
        let request = ScoreboardPreviewRequest {
            interview_id: "int-471".to_string(),
            panel_csv: panel_csv(),
            weights: Some(DimensionWeights::new(0.2, 0.3, 0.5).expect("weights sum to one")),
            imported_on: Some(sample_date()),
        };

        let Json(body) = scoreboard_preview_endpoint(Json(request))
            .await
            .expect("preview builds");

        let score = body.scoreboard.score.expect("aggregate present");
        assert!((score.overall - 8.333).abs() < 5e-4);
    }

    #[tokio::test]
    async fn preview_endpoint_returns_the_sentinel_for_empty_sheets() {
        let request = ScoreboardPreviewRequest {
            interview_id: "int-471".to_string(),
            panel_csv: HEADER.to_string(),
            weights: None,
            imported_on: Some(sample_date()),
        };

        let Json(body) = scoreboard_preview_endpoint(Json(request))
            .await
            .expect("preview builds");

        assert_eq!(
            body.scoreboard.status,
            InterviewScoreboard::NOT_YET_EVALUATED
        );
        assert!(body.scoreboard.score.is_none());
    }

    #[tokio::test]
    async fn preview_endpoint_rejects_unjustified_extremes() {
        let request = ScoreboardPreviewRequest {
            interview_id: "int-471".to_string(),
            panel_csv: format!("{HEADER}Priya Raman,10,6,6,,,,\n"),
            weights: None,
            imported_on: Some(sample_date()),
        };

        let error = scoreboard_preview_endpoint(Json(request))
            .await
            .expect_err("unjustified extreme must fail");

        match error {
            AppError::Import(_) => {}
            other => panic!("expected import error, got {other:?}"),
        }
    }
}
