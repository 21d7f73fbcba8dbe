use std::collections::HashMap;
use std::fmt;

use crate::{Answer, ExperienceSet, RatingField, SurveyField, TextField};

/// Something a record still needs before it can be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Missing {
    Field(SurveyField),

    /// No experience tag is selected.
    Experiences,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => write!(f, "{field}"),
            Self::Experiences => f.write_str("experiences"),
        }
    }
}

/// The answers of one questionnaire session.
///
/// Unset fields are simply absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyRecord {
    answers: HashMap<SurveyField, Answer>,
    experiences: ExperienceSet,
}

impl SurveyRecord {
    /// Create a new empty record.
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            experiences: ExperienceSet::new(),
        }
    }

    /// Get the answer stored for a field.
    pub fn get(&self, field: SurveyField) -> Option<&Answer> {
        self.answers.get(&field)
    }

    /// Get the raw rating stored for a rating field.
    pub fn rating(&self, field: RatingField) -> Option<i64> {
        self.get(field.into()).and_then(Answer::as_rating)
    }

    /// Get the text stored for a text field.
    pub fn text(&self, field: TextField) -> Option<&str> {
        self.get(field.into()).and_then(Answer::as_text)
    }

    pub fn experiences(&self) -> &ExperienceSet {
        &self.experiences
    }

    /// Check if a field holds a non-empty value.
    pub fn has_value(&self, field: SurveyField) -> bool {
        self.get(field).is_some_and(Answer::is_filled)
    }

    /// What is still unanswered: unset or empty fields in questionnaire
    /// order, then `Missing::Experiences` if nothing is selected.
    pub fn missing(&self) -> Vec<Missing> {
        let mut missing: Vec<Missing> = SurveyField::ALL
            .into_iter()
            .filter(|field| !self.has_value(*field))
            .map(Missing::Field)
            .collect();
        if self.experiences.is_empty() {
            missing.push(Missing::Experiences);
        }
        missing
    }

    /// Every field filled and at least one experience selected.
    pub fn is_valid(&self) -> bool {
        SurveyField::ALL.iter().all(|field| self.has_value(*field)) && !self.experiences.is_empty()
    }

    /// Check if nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.experiences.is_empty()
    }

    pub(crate) fn insert(&mut self, field: SurveyField, answer: Answer) {
        self.answers.insert(field, answer);
    }

    pub(crate) fn experiences_mut(&mut self) -> &mut ExperienceSet {
        &mut self.experiences
    }
}
