//! # sleep-survey-dialoguer
//!
//! Terminal frontend for `sleep-survey`, built on dialoguer.
//!
//! `DialoguerWizard` asks the questionnaire section by section and writes the
//! answers into a `SurveyState`; `DialoguerPresenter` implements
//! `sleep_survey::Presenter` with plain lines for progress and toasts and
//! blocking select dialogs for alerts and the prediction.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sleep_survey::{HttpPredictionClient, SubmissionController, SurveyState};
//! use sleep_survey_dialoguer::{DialoguerPresenter, DialoguerWizard};
//!
//! let mut state = SurveyState::new();
//! DialoguerWizard::new().collect(&mut state)?;
//!
//! let controller = SubmissionController::new(client, DialoguerPresenter::new());
//! controller.submit(&mut state).await;
//! ```

mod presenter;
mod wizard;

pub use presenter::{DialoguerPresenter, format_notice};
pub use wizard::{
    DialoguerError, DialoguerWizard, apply_experiences, check_experiences, prompt, theme,
};
