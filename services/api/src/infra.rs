use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use talentflow::workflows::interview::scorecards::{
    DimensionWeights, FeedbackRepository, InterviewFeedback, InterviewId, InterviewerId,
    NotificationError, NotificationPublisher, RepositoryError, ScorecardNotification,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryFeedbackRepository {
    records: Arc<Mutex<HashMap<(InterviewId, InterviewerId), InterviewFeedback>>>,
}

impl FeedbackRepository for InMemoryFeedbackRepository {
    fn insert(&self, feedback: InterviewFeedback) -> Result<InterviewFeedback, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let key = (
            feedback.interview_id.clone(),
            feedback.interviewer_id.clone(),
        );
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
        // Stable ordering keeps aggregation output reproducible across calls.
        records.sort_by(|a, b| a.interviewer_id.0.cmp(&b.interviewer_id.0));
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryNotificationPublisher {
    events: Arc<Mutex<Vec<ScorecardNotification>>>,
}

impl NotificationPublisher for InMemoryNotificationPublisher {
    fn publish(&self, notification: ScorecardNotification) -> Result<(), NotificationError> {
        let mut guard = self.events.lock().expect("notification mutex poisoned");
        guard.push(notification);
        Ok(())
    }
}

impl InMemoryNotificationPublisher {
    pub(crate) fn events(&self) -> Vec<ScorecardNotification> {
        self.events.lock().expect("notification mutex poisoned").clone()
    }
}

pub(crate) fn default_dimension_weights() -> DimensionWeights {
    DimensionWeights::default()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
