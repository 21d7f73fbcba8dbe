use crate::SurveyField;

/// Error type for rating scale lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScaleError {
    /// The value is outside the field's scale, the field is unset, or the
    /// field has no rating scale at all.
    #[error("Unknown rating {value:?} for field '{field}'")]
    UnknownRating {
        field: SurveyField,
        value: Option<i64>,
    },
}

impl ScaleError {
    /// The field whose rating could not be resolved.
    pub fn field(&self) -> SurveyField {
        match self {
            Self::UnknownRating { field, .. } => *field,
        }
    }
}
