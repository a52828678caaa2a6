use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{InterviewId, InterviewerId, ScorecardSubmission};
use super::repository::{FeedbackRepository, NotificationPublisher, RepositoryError, ScorecardReceipt};
use super::service::{ScorecardService, ScorecardServiceError};
use super::validation::ScorecardViolation;

/// Router builder exposing HTTP endpoints for scorecard intake and the
/// aggregated scoreboard.
pub fn scorecard_router<R, N>(service: Arc<ScorecardService<R, N>>) -> Router
where
    R: FeedbackRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route(
            "/api/v1/interviews/:interview_id/scorecards",
            post(submit_handler::<R, N>),
        )
        .route(
            "/api/v1/interviews/:interview_id/scorecard",
            get(scoreboard_handler::<R, N>),
        )
        .route(
            "/api/v1/interviews/:interview_id/scorecards/:interviewer_id",
            get(feedback_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<ScorecardService<R, N>>>,
    Path(interview_id): Path<String>,
    axum::Json(submission): axum::Json<ScorecardSubmission>,
) -> Response
where
    R: FeedbackRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.submit(InterviewId(interview_id), submission) {
        Ok(feedback) => {
            let receipt = ScorecardReceipt::for_feedback(&feedback);
            (StatusCode::ACCEPTED, axum::Json(receipt)).into_response()
        }
        Err(ScorecardServiceError::Scorecard(violation)) => {
            let payload = match &violation {
                ScorecardViolation::MissingJustification { missing } => json!({
                    "error": violation.to_string(),
                    "missingJustifications": missing
                        .iter()
                        .map(|dimension| dimension.wire_name())
                        .collect::<Vec<_>>(),
                }),
                ScorecardViolation::BlankInterviewer => json!({
                    "error": violation.to_string(),
                }),
            };
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ScorecardServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "scorecard already submitted for this interviewer",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn scoreboard_handler<R, N>(
    State(service): State<Arc<ScorecardService<R, N>>>,
    Path(interview_id): Path<String>,
) -> Response
where
    R: FeedbackRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let id = InterviewId(interview_id);
    match service.scoreboard(&id) {
        Ok(scoreboard) => (StatusCode::OK, axum::Json(scoreboard)).into_response(),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn feedback_handler<R, N>(
    State(service): State<Arc<ScorecardService<R, N>>>,
    Path((interview_id, interviewer_id)): Path<(String, String)>,
) -> Response
where
    R: FeedbackRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let interview = InterviewId(interview_id);
    let interviewer = InterviewerId(interviewer_id);
    match service.feedback(&interview, &interviewer) {
        Ok(feedback) => (StatusCode::OK, axum::Json(feedback)).into_response(),
        Err(ScorecardServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "scorecard not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
