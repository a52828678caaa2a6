use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::workflows::interview::scorecards::domain::{
    DimensionRating, InterviewFeedback, InterviewId, InterviewerId, Score, ScorecardSubmission,
};
use crate::workflows::interview::scorecards::repository::{
    FeedbackRepository, NotificationError, NotificationPublisher, RepositoryError,
    ScorecardNotification,
};
use crate::workflows::interview::scorecards::{
    scorecard_router, DimensionWeights, ScorecardService,
};

pub(super) fn interview() -> InterviewId {
    InterviewId("int-204".to_string())
}

pub(super) fn submitted_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .expect("valid date")
        .and_hms_opt(15, 30, 0)
        .expect("valid time")
}

pub(super) fn score(value: u8) -> Score {
    Score::new(value).expect("score within 1-10")
}

/// Baseline valid submission: one justified extreme rating on culture.
pub(super) fn submission() -> ScorecardSubmission {
    ScorecardSubmission {
        interviewer_id: InterviewerId("priya.raman".to_string()),
        technical: score(8),
        behavioral: score(7),
        culture: score(9),
        technical_comments: "Solid systems design round".to_string(),
        behavioral_comments: String::new(),
        culture_comments: "Strong fit, great collaboration stories".to_string(),
        overall_comments: Some("Would hire again".to_string()),
    }
}

/// Invalid case: extreme technical score with no justification while the
/// extreme culture score carries one.
pub(super) fn unjustified_submission() -> ScorecardSubmission {
    ScorecardSubmission {
        interviewer_id: InterviewerId("lin.chen".to_string()),
        technical: score(2),
        behavioral: score(5),
        culture: score(9),
        technical_comments: String::new(),
        behavioral_comments: String::new(),
        culture_comments: "strong fit".to_string(),
        overall_comments: None,
    }
}

pub(super) fn feedback(
    interviewer: &str,
    technical: u8,
    behavioral: u8,
    cultural: u8,
) -> InterviewFeedback {
    InterviewFeedback {
        interview_id: interview(),
        interviewer_id: InterviewerId(interviewer.to_string()),
        technical: DimensionRating::new(score(technical), "technical notes"),
        behavioral: DimensionRating::new(score(behavioral), "behavioral notes"),
        cultural: DimensionRating::new(score(cultural), "culture notes"),
        overall_comment: None,
        submitted_at: submitted_at(),
    }
}

/// The worked three-interviewer panel: averages 8.0 / 8.0 / 8.667, overall
/// 8.133, recommendation Hire.
pub(super) fn panel() -> Vec<InterviewFeedback> {
    vec![
        feedback("priya.raman", 8, 7, 9),
        feedback("lin.chen", 9, 8, 8),
        feedback("sam.okafor", 7, 9, 9),
    ]
}

pub(super) fn build_service() -> (
    ScorecardService<MemoryRepository, MemoryNotifications>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifications>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifications::default());
    let service = ScorecardService::new(
        repository.clone(),
        notifier.clone(),
        DimensionWeights::default(),
    );
    (service, repository, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<(InterviewId, InterviewerId), InterviewFeedback>>>,
}

impl FeedbackRepository for MemoryRepository {
    fn insert(&self, feedback: InterviewFeedback) -> Result<InterviewFeedback, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let key = (feedback.interview_id.clone(), feedback.interviewer_id.clone());
        if guard.contains_key(&key) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(key, feedback.clone());
        Ok(feedback)
    }

    fn fetch(
        &self,
        interview_id: &InterviewId,
        interviewer_id: &InterviewerId,
    ) -> Result<Option<InterviewFeedback>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .get(&(interview_id.clone(), interviewer_id.clone()))
            .cloned())
    }

    fn list(&self, interview_id: &InterviewId) -> Result<Vec<InterviewFeedback>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<InterviewFeedback> = guard
            .values()
            .filter(|feedback| &feedback.interview_id == interview_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.interviewer_id.0.cmp(&b.interviewer_id.0));
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifications {
    events: Arc<Mutex<Vec<ScorecardNotification>>>,
}

impl MemoryNotifications {
    pub(super) fn events(&self) -> Vec<ScorecardNotification> {
        self.events.lock().expect("notification mutex poisoned").clone()
    }
}

impl NotificationPublisher for MemoryNotifications {
    fn publish(&self, notification: ScorecardNotification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl FeedbackRepository for ConflictRepository {
    fn insert(&self, _feedback: InterviewFeedback) -> Result<InterviewFeedback, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(
        &self,
        _interview_id: &InterviewId,
        _interviewer_id: &InterviewerId,
    ) -> Result<Option<InterviewFeedback>, RepositoryError> {
        Ok(None)
    }

    fn list(&self, _interview_id: &InterviewId) -> Result<Vec<InterviewFeedback>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl FeedbackRepository for UnavailableRepository {
    fn insert(&self, _feedback: InterviewFeedback) -> Result<InterviewFeedback, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(
        &self,
        _interview_id: &InterviewId,
        _interviewer_id: &InterviewerId,
    ) -> Result<Option<InterviewFeedback>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self, _interview_id: &InterviewId) -> Result<Vec<InterviewFeedback>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn scorecard_router_with_service(
    service: ScorecardService<MemoryRepository, MemoryNotifications>,
) -> axum::Router {
    scorecard_router(Arc::new(service))
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
