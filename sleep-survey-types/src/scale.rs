//! Rating scales and the field-to-scale assignment.
//!
//! Ratings are 1-based: rating `n` maps to `labels()[n - 1]`.

use crate::{RatingField, ScaleError, SurveyField};

pub const INTEREST_LABELS: [&str; 4] = [
    "Not Interested",
    "Neutral",
    "Interested",
    "Very Interested",
];

pub const FREQUENCY_LABELS: [&str; 4] = ["Rarely", "Sometimes", "Often", "Almost Always"];

pub const ENVIRONMENTAL_LABELS: [&str; 5] = [
    "Very Poor",
    "Poor",
    "Average",
    "Good",
    "Excellent",
];

/// The scale a field is answered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    /// 4-point interest scale.
    Interest,

    /// 4-point symptom frequency scale.
    Frequency,

    /// 5-point environmental quality scale.
    Environmental,

    /// Free text, no scale.
    Freeform,
}

impl ScaleKind {
    /// The ordered labels of this scale. Empty for `Freeform`.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Self::Interest => &INTEREST_LABELS,
            Self::Frequency => &FREQUENCY_LABELS,
            Self::Environmental => &ENVIRONMENTAL_LABELS,
            Self::Freeform => &[],
        }
    }

    /// Number of levels on this scale.
    pub fn size(&self) -> usize {
        self.labels().len()
    }

    /// Label for a 1-based rating, if it is within `[1, size]`.
    pub fn label(&self, rating: i64) -> Option<&'static str> {
        let index = usize::try_from(rating).ok()?.checked_sub(1)?;
        self.labels().get(index).copied()
    }
}

/// The scale assigned to a rating field.
pub fn scale_of(field: RatingField) -> ScaleKind {
    match field {
        RatingField::InterestRate => ScaleKind::Interest,
        RatingField::DifficultyFallingAsleep
        | RatingField::WakingUp
        | RatingField::DiffBackToSleep
        | RatingField::TossTurn
        | RatingField::Unrefreshed
        | RatingField::HeadAches
        | RatingField::Irritated
        | RatingField::Intervenes
        | RatingField::GettingOutOfBed
        | RatingField::Concentration => ScaleKind::Frequency,
        RatingField::Temp
        | RatingField::Ventilation
        | RatingField::NoiseLevel
        | RatingField::Lighting => ScaleKind::Environmental,
    }
}

/// The scale a field is answered on; text fields are `Freeform`.
pub fn scale_for(field: SurveyField) -> ScaleKind {
    match field {
        SurveyField::Rating(rating) => scale_of(rating),
        SurveyField::Text(_) => ScaleKind::Freeform,
    }
}

/// Resolve a raw rating to its label on the field's scale.
///
/// # Errors
/// `ScaleError::UnknownRating` when `value` is outside `[1, N]` or the field
/// is a free-text field.
pub fn label_for(field: SurveyField, value: i64) -> Result<&'static str, ScaleError> {
    scale_for(field)
        .label(value)
        .ok_or(ScaleError::UnknownRating {
            field,
            value: Some(value),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextField;

    #[test]
    fn label_for_in_range() {
        let interest = SurveyField::Rating(RatingField::InterestRate);
        assert_eq!(label_for(interest, 1).unwrap(), "Not Interested");
        assert_eq!(label_for(interest, 4).unwrap(), "Very Interested");

        let waking = SurveyField::Rating(RatingField::WakingUp);
        assert_eq!(label_for(waking, 2).unwrap(), "Sometimes");
        assert_eq!(label_for(waking, 4).unwrap(), "Almost Always");

        let lighting = SurveyField::Rating(RatingField::Lighting);
        assert_eq!(label_for(lighting, 3).unwrap(), "Average");
        assert_eq!(label_for(lighting, 5).unwrap(), "Excellent");
    }

    #[test]
    fn label_for_out_of_range() {
        let waking = SurveyField::Rating(RatingField::WakingUp);
        for value in [-1, 0, 5, i64::MAX] {
            assert!(matches!(
                label_for(waking, value),
                Err(ScaleError::UnknownRating { value: Some(v), .. }) if v == value
            ));
        }

        // 5 is valid on the environmental scale but not on the frequency scale.
        assert!(label_for(SurveyField::Rating(RatingField::Temp), 5).is_ok());
        assert!(label_for(SurveyField::Rating(RatingField::Temp), 6).is_err());
    }

    #[test]
    fn label_for_text_field_fails() {
        let field = SurveyField::Text(TextField::SleepHours);
        let err = label_for(field, 1).unwrap_err();
        assert_eq!(err.field(), field);
    }

    #[test]
    fn every_label_is_reachable() {
        for field in SurveyField::ALL {
            let scale = scale_for(field);
            for rating in 1..=scale.size() as i64 {
                let label = label_for(field, rating).unwrap();
                assert!(scale.labels().contains(&label));
            }
        }
    }

    #[test]
    fn scale_assignment() {
        let counts = |kind: ScaleKind| {
            SurveyField::ALL
                .iter()
                .filter(|f| scale_for(**f) == kind)
                .count()
        };
        assert_eq!(counts(ScaleKind::Interest), 1);
        assert_eq!(counts(ScaleKind::Frequency), 10);
        assert_eq!(counts(ScaleKind::Environmental), 4);
        assert_eq!(counts(ScaleKind::Freeform), 4);
    }
}
