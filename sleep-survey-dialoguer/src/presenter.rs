//! Terminal rendering of progress, notices and the prediction dialog.

use dialoguer::Select;
use sleep_survey::{Acknowledgement, Notice, NoticeStyle, Presenter, RESULT_HEADER, Severity};
use tracing::{debug, warn};

use crate::wizard::{map_err, theme};

/// Presenter that draws on the terminal with dialoguer.
///
/// Alerts and the prediction dialog block until the user picks an entry;
/// toasts and progress messages are plain lines.
#[derive(Debug, Clone)]
pub struct DialoguerPresenter {
    colorful: bool,
}

impl Default for DialoguerPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerPresenter {
    pub fn new() -> Self {
        Self { colorful: true }
    }

    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Blocking single-choice dialog. Returns `None` if the terminal failed
    /// or the user cancelled.
    fn choose(&self, prompt: &str, actions: &[&str], default: usize) -> Option<usize> {
        let theme = theme(self.colorful);
        match Select::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .items(actions)
            .default(default)
            .interact()
        {
            Ok(index) => Some(index),
            Err(err) => {
                warn!(error = %map_err(err), "dialog closed without a choice");
                None
            }
        }
    }
}

/// A one-line rendering of a notice.
pub fn format_notice(notice: &Notice) -> String {
    let marker = match notice.severity {
        Severity::Success => "✔",
        Severity::Warning => "!",
        Severity::Danger => "✘",
    };
    match &notice.header {
        Some(header) => format!("{marker} {header}: {}", notice.message),
        None => format!("{marker} {}", notice.message),
    }
}

impl Presenter for DialoguerPresenter {
    fn show_progress(&self, message: &str) {
        println!("{message}");
    }

    fn dismiss_progress(&self) {
        debug!("progress dismissed");
    }

    fn notify(&self, notice: &Notice) {
        let line = format_notice(notice);
        match notice.style {
            NoticeStyle::Toast { .. } => eprintln!("{line}"),
            NoticeStyle::Alert => {
                self.choose(&line, &["OK"], 0);
            }
        }
    }

    fn present_prediction(&self, prediction: &str) -> Acknowledgement {
        let prompt = format!("{RESULT_HEADER}: {prediction}");
        self.choose(&prompt, &Acknowledgement::ACTIONS, 1)
            .map(Acknowledgement::from_index)
            .unwrap_or_default()
    }
}
