//! The submit cycle: validate, transform, send, present, reset.

use std::sync::{Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::{
    Acknowledgement, Notice, PROGRESS_MESSAGE, PredictionClient, PredictionResponse, Presenter,
    ProgressGuard, SUCCESS_MESSAGE, Severity, SubmitError, SurveyRecord, SurveyState, transform,
};

/// Where the controller is in a submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Sending,
    Succeeded,
    Failed,
}

/// Result of one `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The service returned a prediction. `restarted` is true when the user
    /// chose to start over and the survey was reset.
    Succeeded { prediction: String, restarted: bool },

    /// Validation or submission failed. The survey is untouched.
    Failed(SubmitError),

    /// Another submit cycle was already in flight; this call did nothing.
    Busy,
}

impl Outcome {
    pub fn prediction(&self) -> Option<&str> {
        match self {
            Self::Succeeded { prediction, .. } => Some(prediction.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SubmitError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Drives one submission at a time against a `PredictionClient`, reporting
/// to a `Presenter`.
///
/// `submit` takes `&self`: a controller shared between several callers
/// rejects a second submission while one is in flight instead of queueing it.
#[derive(Debug)]
pub struct SubmissionController<C, P> {
    client: C,
    presenter: P,
    phase: Mutex<Phase>,
}

impl<C, P> SubmissionController<C, P>
where
    C: PredictionClient,
    P: Presenter,
{
    pub fn new(client: C, presenter: P) -> Self {
        Self {
            client,
            presenter,
            phase: Mutex::new(Phase::Idle),
        }
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one submit cycle for `state`.
    ///
    /// Every failure is reported through the presenter and returned as
    /// `Outcome::Failed`; `state` is only reset after a prediction was shown
    /// and the user chose to restart.
    pub async fn submit(&self, state: &mut SurveyState) -> Outcome {
        let Some(cycle) = Cycle::begin(&self.phase) else {
            warn!("submission already in progress, ignoring submit");
            return Outcome::Busy;
        };

        if !state.is_valid() {
            let missing = state.missing();
            info!(missing = ?missing, "survey incomplete, not submitting");
            cycle.set(Phase::Idle);
            let err = SubmitError::IncompleteForm { missing };
            self.presenter.notify(&Notice::for_error(&err));
            return Outcome::Failed(err);
        }

        cycle.set(Phase::Sending);
        let result = {
            let _progress = ProgressGuard::show(&self.presenter, PROGRESS_MESSAGE);
            self.send(state.record()).await
        };

        match result {
            Ok(response) => {
                cycle.set(Phase::Succeeded);
                info!(prediction = %response.prediction, "prediction received");
                self.presenter
                    .notify(&Notice::toast(SUCCESS_MESSAGE, Severity::Success));

                let restarted = match self.presenter.present_prediction(&response.prediction) {
                    Acknowledgement::Restart => {
                        state.reset();
                        true
                    }
                    Acknowledgement::KeepAnswers => false,
                };

                Outcome::Succeeded {
                    prediction: response.prediction,
                    restarted,
                }
            }
            Err(err) => {
                cycle.set(Phase::Failed);
                warn!(error = %err, "survey submission failed");
                self.presenter.notify(&Notice::for_error(&err));
                Outcome::Failed(err)
            }
        }
    }

    async fn send(&self, record: &SurveyRecord) -> Result<PredictionResponse, SubmitError> {
        let payload = transform(record)?;
        debug!(?payload, "built prediction payload");

        self.client.check_health().await?;
        Ok(self.client.predict(&payload).await?)
    }
}

/// Exclusive claim on the controller for one submit cycle. Returns the
/// controller to `Idle` when dropped.
struct Cycle<'a> {
    phase: &'a Mutex<Phase>,
}

impl<'a> Cycle<'a> {
    fn begin(phase: &'a Mutex<Phase>) -> Option<Self> {
        let mut current = phase.lock().unwrap_or_else(PoisonError::into_inner);
        if *current != Phase::Idle {
            return None;
        }
        *current = Phase::Validating;
        Some(Self { phase })
    }

    fn set(&self, next: Phase) {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

impl Drop for Cycle<'_> {
    fn drop(&mut self) {
        self.set(Phase::Idle);
    }
}
