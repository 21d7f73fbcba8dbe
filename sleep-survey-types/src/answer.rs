/// A single answer stored in a `SurveyRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A raw numeric rating as emitted by the input widget. Not bounds-checked.
    Rating(i64),

    /// A free-form string.
    Text(String),
}

impl Answer {
    /// Try to get this answer as a rating.
    pub fn as_rating(&self) -> Option<i64> {
        match self {
            Self::Rating(value) => Some(*value),
            _ => None,
        }
    }

    /// Try to get this answer as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether this answer counts as filled in for validation.
    ///
    /// Ratings always do; text only when non-empty.
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Rating(_) => true,
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl From<i64> for Answer {
    fn from(value: i64) -> Self {
        Self::Rating(value)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
