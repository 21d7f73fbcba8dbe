//! Presentation capabilities the controller relies on, and the mapping from
//! submit errors to user-facing notices.

use std::time::Duration;

use crate::SubmitError;

pub const PROGRESS_MESSAGE: &str = "Submitting survey...";
pub const RESULT_HEADER: &str = "Result";
pub const SUCCESS_MESSAGE: &str = "Survey submitted successfully!";
pub const INCOMPLETE_HEADER: &str = "Incomplete Form";
pub const INCOMPLETE_MESSAGE: &str = "Please complete all required fields before submitting.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Error submitting survey. Please try again.";
pub const CONNECTIVITY_MESSAGE: &str = "Cannot reach the prediction server. Please try again.";
pub const INVALID_DATA_MESSAGE: &str = "The server rejected the survey data as invalid.";
pub const SERVER_ERROR_MESSAGE: &str = "The prediction server encountered an error.";
pub const MALFORMED_MESSAGE: &str = "Unexpected response from the prediction server.";

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

/// How a notice is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    /// Transient message that disappears after `duration`.
    Toast { duration: Duration },

    /// Blocking message the user has to dismiss.
    Alert,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub header: Option<String>,
    pub message: String,
    pub severity: Severity,
    pub style: NoticeStyle,
}

impl Notice {
    pub fn toast(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            header: None,
            message: message.into(),
            severity,
            style: NoticeStyle::Toast {
                duration: TOAST_DURATION,
            },
        }
    }

    pub fn alert(header: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            header: Some(header.into()),
            message: message.into(),
            severity,
            style: NoticeStyle::Alert,
        }
    }

    /// The notice shown for a failed submit cycle.
    pub fn for_error(err: &SubmitError) -> Self {
        match err {
            SubmitError::IncompleteForm { .. } => {
                Self::alert(INCOMPLETE_HEADER, INCOMPLETE_MESSAGE, Severity::Warning)
            }
            SubmitError::Connectivity(_) => Self::toast(CONNECTIVITY_MESSAGE, Severity::Danger),
            SubmitError::Server { status: 400, .. } => {
                Self::toast(INVALID_DATA_MESSAGE, Severity::Danger)
            }
            SubmitError::Server { status, .. } if *status >= 500 => {
                Self::toast(SERVER_ERROR_MESSAGE, Severity::Danger)
            }
            SubmitError::MalformedResponse(_) => Self::toast(MALFORMED_MESSAGE, Severity::Danger),
            SubmitError::Server { .. } | SubmitError::UnknownRating(_) => {
                Self::toast(GENERIC_FAILURE_MESSAGE, Severity::Danger)
            }
        }
    }
}

/// The user's answer to the prediction dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Acknowledgement {
    /// Start a fresh questionnaire.
    Restart,

    /// Close the dialog and keep the current answers.
    #[default]
    KeepAnswers,
}

impl Acknowledgement {
    /// Action labels, in the order `from_index` understands them.
    pub const ACTIONS: [&'static str; 2] = ["Restart", "Keep answers"];

    pub fn from_index(index: usize) -> Self {
        if index == 0 {
            Self::Restart
        } else {
            Self::KeepAnswers
        }
    }
}

/// UI capabilities used by `SubmissionController`.
///
/// Every call blocks until the UI has done its part; `present_prediction`
/// returns once the user picked an action.
pub trait Presenter {
    /// Show a blocking progress indication.
    fn show_progress(&self, message: &str);

    /// Remove the progress indication.
    fn dismiss_progress(&self);

    /// Show a toast or alert.
    fn notify(&self, notice: &Notice);

    /// Show the predicted label and ask what to do next.
    fn present_prediction(&self, prediction: &str) -> Acknowledgement;
}

impl<P: Presenter + ?Sized> Presenter for &P {
    fn show_progress(&self, message: &str) {
        (**self).show_progress(message)
    }

    fn dismiss_progress(&self) {
        (**self).dismiss_progress()
    }

    fn notify(&self, notice: &Notice) {
        (**self).notify(notice)
    }

    fn present_prediction(&self, prediction: &str) -> Acknowledgement {
        (**self).present_prediction(prediction)
    }
}

/// Keeps the progress indication up for as long as it lives.
///
/// Dropping the guard dismisses it exactly once, whichever way the
/// surrounding scope is left.
#[must_use = "the progress indication is dismissed when the guard is dropped"]
pub struct ProgressGuard<'a, P: Presenter + ?Sized> {
    presenter: &'a P,
}

impl<'a, P: Presenter + ?Sized> ProgressGuard<'a, P> {
    pub fn show(presenter: &'a P, message: &str) -> Self {
        presenter.show_progress(message);
        Self { presenter }
    }
}

impl<P: Presenter + ?Sized> Drop for ProgressGuard<'_, P> {
    fn drop(&mut self) {
        self.presenter.dismiss_progress();
    }
}
