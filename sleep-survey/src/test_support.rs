//! Test doubles for driving `SubmissionController` without a network or UI.
//!
//! `MockPredictionClient` replays scripted responses and records every
//! payload it receives; `RecordingPresenter` records every presenter call and
//! answers the prediction dialog with a configurable acknowledgement. Both
//! are cheap to clone and clones share their recordings, so a test can hand
//! one clone to the controller and inspect the other.
//!
//! # Example
//!
//! ```rust,ignore
//! use sleep_survey::{MockPredictionClient, RecordingPresenter, SubmissionController};
//!
//! let client = MockPredictionClient::new().with_prediction("Good Sleep Quality");
//! let presenter = RecordingPresenter::new();
//! let controller = SubmissionController::new(client.clone(), presenter.clone());
//!
//! let outcome = controller.submit(&mut state).await;
//! assert_eq!(client.requests().len(), 1);
//! assert_eq!(presenter.predictions(), vec!["Good Sleep Quality"]);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::{
    Acknowledgement, ClientError, Experience, Notice, PredictionClient, PredictionPayload,
    PredictionResponse, Presenter, RatingField, SurveyState, TextField,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A survey state with every field answered and "None" selected.
pub fn complete_survey() -> SurveyState {
    let mut state = SurveyState::new();
    state.set_text(TextField::SleepHours, "7-8 hours");
    state.set_text(TextField::Position, "Side");
    state.set_text(TextField::ScreenTime, "1-2 hours");
    state.set_text(TextField::AcadPressure, "Moderate");
    for field in RatingField::ALL {
        state.set_rating(field, 3);
    }
    state.toggle_experience(Experience::None, true);
    state
}

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<Result<PredictionResponse, ClientError>>,
    health: Option<ClientError>,
    health_checks: usize,
    requests: Vec<PredictionPayload>,
}

/// A prediction client that returns pre-configured responses.
///
/// Responses are consumed in order; once the script runs out every request
/// fails with `ClientError::Connectivity`.
#[derive(Debug, Clone, Default)]
pub struct MockPredictionClient {
    state: Arc<Mutex<MockState>>,
}

impl MockPredictionClient {
    /// Create a new client with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful prediction.
    pub fn with_prediction(self, prediction: impl Into<String>) -> Self {
        lock(&self.state).responses.push_back(Ok(PredictionResponse {
            prediction: prediction.into(),
        }));
        self
    }

    /// Queue a failed request.
    pub fn with_error(self, err: ClientError) -> Self {
        lock(&self.state).responses.push_back(Err(err));
        self
    }

    /// Make every health probe fail with `err`.
    pub fn with_failing_health_check(self, err: ClientError) -> Self {
        lock(&self.state).health = Some(err);
        self
    }

    /// Payloads received so far.
    pub fn requests(&self) -> Vec<PredictionPayload> {
        lock(&self.state).requests.clone()
    }

    /// Number of health probes so far.
    pub fn health_checks(&self) -> usize {
        lock(&self.state).health_checks
    }
}

#[async_trait]
impl PredictionClient for MockPredictionClient {
    async fn check_health(&self) -> Result<(), ClientError> {
        let mut state = lock(&self.state);
        state.health_checks += 1;
        match &state.health {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn predict(&self, payload: &PredictionPayload) -> Result<PredictionResponse, ClientError> {
        let mut state = lock(&self.state);
        state.requests.push(payload.clone());
        state.responses.pop_front().unwrap_or_else(|| {
            Err(ClientError::Connectivity(
                "no scripted response left".to_string(),
            ))
        })
    }
}

/// A presenter call, as recorded by `RecordingPresenter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    ShowProgress(String),
    DismissProgress,
    Notify(Notice),
    Prediction(String),
}

/// A presenter that records calls instead of drawing anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    events: Arc<Mutex<Vec<PresenterEvent>>>,
    acknowledgement: Acknowledgement,
}

impl RecordingPresenter {
    /// Create a presenter that answers the prediction dialog with "keep answers".
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the prediction dialog with `acknowledgement`.
    pub fn with_acknowledgement(mut self, acknowledgement: Acknowledgement) -> Self {
        self.acknowledgement = acknowledgement;
        self
    }

    pub fn events(&self) -> Vec<PresenterEvent> {
        lock(&self.events).clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        lock(&self.events)
            .iter()
            .filter_map(|event| match event {
                PresenterEvent::Notify(notice) => Some(notice.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn predictions(&self) -> Vec<String> {
        lock(&self.events)
            .iter()
            .filter_map(|event| match event {
                PresenterEvent::Prediction(label) => Some(label.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn progress_shown(&self) -> usize {
        self.count(|event| matches!(event, PresenterEvent::ShowProgress(_)))
    }

    pub fn progress_dismissed(&self) -> usize {
        self.count(|event| matches!(event, PresenterEvent::DismissProgress))
    }

    fn count(&self, predicate: impl Fn(&PresenterEvent) -> bool) -> usize {
        lock(&self.events).iter().filter(|e| predicate(e)).count()
    }

    fn record(&self, event: PresenterEvent) {
        lock(&self.events).push(event);
    }
}

impl Presenter for RecordingPresenter {
    fn show_progress(&self, message: &str) {
        self.record(PresenterEvent::ShowProgress(message.to_string()));
    }

    fn dismiss_progress(&self) {
        self.record(PresenterEvent::DismissProgress);
    }

    fn notify(&self, notice: &Notice) {
        self.record(PresenterEvent::Notify(notice.clone()));
    }

    fn present_prediction(&self, prediction: &str) -> Acknowledgement {
        self.record(PresenterEvent::Prediction(prediction.to_string()));
        self.acknowledgement
    }
}
