//! Step-by-step questionnaire that fills a `SurveyState`.

use dialoguer::{
    Input, MultiSelect, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use sleep_survey::{Experience, RatingField, SurveyField, SurveyState, TextField, scale::scale_of};
use thiserror::Error;
use tracing::debug;

/// Error type for the Dialoguer frontend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
pub(crate) fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

pub(crate) fn map_err(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// The prompt theme: colorful, or plain for `--plain`.
pub fn theme(colorful: bool) -> Box<dyn Theme> {
    if colorful {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    }
}

/// A questionnaire section: a heading and the fields asked under it.
struct Section {
    title: &'static str,
    fields: &'static [SurveyField],
}

const SECTIONS: [Section; 3] = [
    Section {
        title: "Sleep habits",
        fields: &[
            SurveyField::Text(TextField::SleepHours),
            SurveyField::Rating(RatingField::InterestRate),
            SurveyField::Text(TextField::Position),
            SurveyField::Text(TextField::ScreenTime),
            SurveyField::Text(TextField::AcadPressure),
        ],
    },
    Section {
        title: "Sleep quality: how often in the past month...",
        fields: &[
            SurveyField::Rating(RatingField::DifficultyFallingAsleep),
            SurveyField::Rating(RatingField::WakingUp),
            SurveyField::Rating(RatingField::DiffBackToSleep),
            SurveyField::Rating(RatingField::TossTurn),
            SurveyField::Rating(RatingField::Unrefreshed),
            SurveyField::Rating(RatingField::HeadAches),
            SurveyField::Rating(RatingField::Irritated),
            SurveyField::Rating(RatingField::Intervenes),
            SurveyField::Rating(RatingField::GettingOutOfBed),
            SurveyField::Rating(RatingField::Concentration),
        ],
    },
    Section {
        title: "Sleep environment",
        fields: &[
            SurveyField::Rating(RatingField::Temp),
            SurveyField::Rating(RatingField::Ventilation),
            SurveyField::Rating(RatingField::NoiseLevel),
            SurveyField::Rating(RatingField::Lighting),
        ],
    },
];

const EXPERIENCES_TITLE: &str = "Experiences";
const EXPERIENCES_PROMPT: &str = "Which of these affect your sleep?";

/// The question shown for a field.
pub fn prompt(field: SurveyField) -> &'static str {
    match field {
        SurveyField::Text(TextField::SleepHours) => "How many hours do you usually sleep per night?",
        SurveyField::Text(TextField::Position) => "What is your usual sleeping position?",
        SurveyField::Text(TextField::ScreenTime) => "How much screen time do you have before bed?",
        SurveyField::Text(TextField::AcadPressure) => "How would you describe your academic pressure?",
        SurveyField::Rating(field) => match field {
            RatingField::InterestRate => "How interested are you in improving your sleep?",
            RatingField::DifficultyFallingAsleep => "Difficulty falling asleep",
            RatingField::WakingUp => "Waking up during the night",
            RatingField::DiffBackToSleep => "Difficulty getting back to sleep",
            RatingField::TossTurn => "Tossing and turning",
            RatingField::Unrefreshed => "Waking up unrefreshed",
            RatingField::HeadAches => "Headaches after waking up",
            RatingField::Irritated => "Feeling irritated during the day",
            RatingField::Intervenes => "Sleepiness interfering with daily activities",
            RatingField::GettingOutOfBed => "Difficulty getting out of bed",
            RatingField::Concentration => "Trouble concentrating",
            RatingField::Temp => "Room temperature",
            RatingField::Ventilation => "Ventilation",
            RatingField::NoiseLevel => "Noise level",
            RatingField::Lighting => "Lighting",
        },
    }
}

/// Why an experience selection cannot be applied, if it can't.
pub fn check_experiences(selected: &[Experience]) -> Result<(), String> {
    if selected.is_empty() {
        return Err("Select at least one option (or \"None\")".to_string());
    }
    if selected.len() > 1 && selected.contains(&Experience::None) {
        return Err("\"None\" cannot be combined with other experiences".to_string());
    }
    Ok(())
}

/// Make `state`'s experience set match `selected`, going through the
/// regular toggle rules.
pub fn apply_experiences(state: &mut SurveyState, selected: &[Experience]) {
    for tag in Experience::ALL {
        if !selected.contains(&tag) {
            state.toggle_experience(tag, false);
        }
    }
    for tag in selected {
        state.toggle_experience(*tag, true);
    }
}

/// Dialoguer wizard for interactive CLI prompts.
///
/// Questions are asked section by section. Answers already in the state are
/// pre-selected, so re-running the wizard after a failed submission only
/// needs the user to confirm or change them.
#[derive(Debug, Clone)]
pub struct DialoguerWizard {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl Default for DialoguerWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerWizard {
    /// Create a new Dialoguer wizard with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a wizard with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    pub fn is_colorful(&self) -> bool {
        self.colorful
    }

    /// Ask every question, writing answers into `state`.
    pub fn collect(&self, state: &mut SurveyState) -> Result<(), DialoguerError> {
        for section in &SECTIONS {
            println!();
            println!("== {} ==", section.title);
            for field in section.fields {
                match field {
                    SurveyField::Text(text) => self.ask_text(*text, state)?,
                    SurveyField::Rating(rating) => self.ask_rating(*rating, state)?,
                }
            }
        }

        println!();
        println!("== {EXPERIENCES_TITLE} ==");
        self.ask_experiences(state)?;

        debug!(valid = state.is_valid(), "questionnaire collected");
        Ok(())
    }

    fn ask_text(&self, field: TextField, state: &mut SurveyState) -> Result<(), DialoguerError> {
        let theme = theme(self.colorful);
        let mut builder: Input<String> = Input::with_theme(theme.as_ref())
            .with_prompt(prompt(field.into()))
            .allow_empty(false);

        if let Some(previous) = state.text(field).filter(|s| !s.is_empty()) {
            builder = builder.default(previous.to_string());
        }

        let value = builder.interact_text().map_err(map_err)?;
        state.set_text(field, value);
        Ok(())
    }

    fn ask_rating(&self, field: RatingField, state: &mut SurveyState) -> Result<(), DialoguerError> {
        let scale = scale_of(field);
        let labels = scale.labels();
        let items: Vec<String> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| format!("{} - {label}", i + 1))
            .collect();

        let theme = theme(self.colorful);
        let mut builder = Select::with_theme(theme.as_ref())
            .with_prompt(prompt(field.into()))
            .items(&items);

        // Only pre-select ratings the scale knows about.
        let previous = state
            .rating(field)
            .and_then(|rating| usize::try_from(rating).ok())
            .and_then(|rating| rating.checked_sub(1))
            .filter(|index| *index < scale.size());
        if let Some(index) = previous {
            builder = builder.default(index);
        }

        let index = builder.interact().map_err(map_err)?;
        state.set_rating(field, index as i64 + 1);
        Ok(())
    }

    fn ask_experiences(&self, state: &mut SurveyState) -> Result<(), DialoguerError> {
        let items: Vec<&str> = Experience::ALL.iter().map(Experience::label).collect();

        let selected = loop {
            let defaults: Vec<bool> = Experience::ALL
                .iter()
                .map(|tag| state.experiences().contains(*tag))
                .collect();

            let theme = theme(self.colorful);
            let indices = MultiSelect::with_theme(theme.as_ref())
                .with_prompt(EXPERIENCES_PROMPT)
                .items(&items)
                .defaults(&defaults)
                .interact()
                .map_err(map_err)?;

            let selected: Vec<Experience> = indices.iter().map(|i| Experience::ALL[*i]).collect();
            if let Err(msg) = check_experiences(&selected) {
                println!("Error: {msg}");
                continue;
            }
            break selected;
        };

        apply_experiences(state, &selected);
        Ok(())
    }
}
