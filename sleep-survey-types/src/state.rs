use crate::{Answer, Experience, ExperienceSet, Missing, RatingField, SurveyRecord, TextField};

/// The in-progress questionnaire, mutated by the interaction layer.
///
/// Validity is derived from the current answers on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyState {
    record: SurveyRecord,
}

impl SurveyState {
    /// Create a new empty survey state.
    pub fn new() -> Self {
        Self {
            record: SurveyRecord::new(),
        }
    }

    /// Store a raw rating. Out-of-range values are kept as they are and only
    /// surface when the record is transformed.
    pub fn set_rating(&mut self, field: RatingField, value: i64) {
        self.record.insert(field.into(), Answer::Rating(value));
    }

    /// Store a free-text answer.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        self.record.insert(field.into(), Answer::Text(value.into()));
    }

    /// Select or deselect an experience tag.
    pub fn toggle_experience(&mut self, tag: Experience, selected: bool) {
        self.record.experiences_mut().toggle(tag, selected);
    }

    pub fn is_valid(&self) -> bool {
        self.record.is_valid()
    }

    pub fn missing(&self) -> Vec<Missing> {
        self.record.missing()
    }

    /// Discard all answers and selected experiences.
    pub fn reset(&mut self) {
        self.record = SurveyRecord::new();
    }

    pub fn record(&self) -> &SurveyRecord {
        &self.record
    }

    pub fn rating(&self, field: RatingField) -> Option<i64> {
        self.record.rating(field)
    }

    pub fn text(&self, field: TextField) -> Option<&str> {
        self.record.text(field)
    }

    pub fn experiences(&self) -> &ExperienceSet {
        self.record.experiences()
    }
}
