//! # sleep-survey
//!
//! Sleep quality questionnaire: answer model, payload transformation and
//! submission to a prediction service. Presentation-agnostic.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sleep_survey::{
//!     ClientConfig, Experience, HttpPredictionClient, RatingField, SubmissionController,
//!     SurveyState, TextField,
//! };
//!
//! let mut state = SurveyState::new();
//! state.set_text(TextField::SleepHours, "7-8 hours");
//! state.set_rating(RatingField::Temp, 4);
//! state.toggle_experience(Experience::None, true);
//! // ... answer the remaining fields
//!
//! let client = HttpPredictionClient::new(ClientConfig::load()?)?;
//! let controller = SubmissionController::new(client, presenter);
//! let outcome = controller.submit(&mut state).await;
//! ```
//!
//! ## Pieces
//!
//! - `transform` - Turns a valid `SurveyRecord` into a `PredictionPayload`
//! - `PredictionClient` - The service boundary; `HttpPredictionClient` speaks HTTP/JSON
//! - `Presenter` - Progress, notices and the prediction dialog
//! - `SubmissionController` - Validate, send, present, reset
//!
//! ## Frontends
//!
//! Frontends are separate crates that implement `Presenter`:
//! - `sleep-survey-dialoguer` - Terminal questionnaire via dialoguer

// Re-export all types from sleep-survey-types
pub use sleep_survey_types::*;

mod transform;
pub use transform::{PredictionPayload, transform};

mod error;
pub use error::{ClientError, SubmitError};

mod config;
pub use config::{
    ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ENDPOINT_VAR, HEALTH_ENDPOINT_VAR,
    TIMEOUT_VAR,
};

mod client;
pub use client::{HttpPredictionClient, PredictionClient, PredictionResponse, parse_prediction};

mod presenter;
pub use presenter::{
    Acknowledgement, CONNECTIVITY_MESSAGE, GENERIC_FAILURE_MESSAGE, INCOMPLETE_HEADER,
    INCOMPLETE_MESSAGE, INVALID_DATA_MESSAGE, MALFORMED_MESSAGE, Notice, NoticeStyle,
    PROGRESS_MESSAGE, Presenter, ProgressGuard, RESULT_HEADER, SERVER_ERROR_MESSAGE,
    SUCCESS_MESSAGE, Severity, TOAST_DURATION,
};

mod controller;
pub use controller::{Outcome, Phase, SubmissionController};

// Test doubles for exercising the controller without a network or UI
pub mod test_support;
pub use test_support::{MockPredictionClient, PresenterEvent, RecordingPresenter};
