use std::fmt;

/// A questionnaire field answered with a numeric rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RatingField {
    InterestRate,
    DifficultyFallingAsleep,
    WakingUp,
    DiffBackToSleep,
    TossTurn,
    Unrefreshed,
    HeadAches,
    Irritated,
    Intervenes,
    GettingOutOfBed,
    Concentration,
    Temp,
    Ventilation,
    NoiseLevel,
    Lighting,
}

impl RatingField {
    /// All rating fields in questionnaire order.
    pub const ALL: [RatingField; 15] = [
        Self::InterestRate,
        Self::DifficultyFallingAsleep,
        Self::WakingUp,
        Self::DiffBackToSleep,
        Self::TossTurn,
        Self::Unrefreshed,
        Self::HeadAches,
        Self::Irritated,
        Self::Intervenes,
        Self::GettingOutOfBed,
        Self::Concentration,
        Self::Temp,
        Self::Ventilation,
        Self::NoiseLevel,
        Self::Lighting,
    ];

    /// The key used for this field on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InterestRate => "interest_rate",
            Self::DifficultyFallingAsleep => "difficulty_falling_asleep",
            Self::WakingUp => "waking_up",
            Self::DiffBackToSleep => "diff_back_to_sleep",
            Self::TossTurn => "toss_turn",
            Self::Unrefreshed => "unrefreshed",
            Self::HeadAches => "head_aches",
            Self::Irritated => "irritated",
            Self::Intervenes => "intervenes",
            Self::GettingOutOfBed => "getting_out_of_bed",
            Self::Concentration => "concentration",
            Self::Temp => "temp",
            Self::Ventilation => "ventilation",
            Self::NoiseLevel => "noise_level",
            Self::Lighting => "lighting",
        }
    }
}

/// A questionnaire field answered with free text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextField {
    SleepHours,
    Position,
    ScreenTime,
    AcadPressure,
}

impl TextField {
    pub const ALL: [TextField; 4] = [
        Self::SleepHours,
        Self::Position,
        Self::ScreenTime,
        Self::AcadPressure,
    ];

    /// The key used for this field on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SleepHours => "sleep_hours",
            Self::Position => "position",
            Self::ScreenTime => "screen_time",
            Self::AcadPressure => "acad_pressure",
        }
    }
}

/// Identifies one of the 19 required answer fields.
///
/// Fields are split by the kind of value they hold, so a rating can never be
/// written into a text field (or the other way around).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SurveyField {
    Rating(RatingField),
    Text(TextField),
}

impl SurveyField {
    /// Every required field, in the order the questionnaire presents them.
    pub const ALL: [SurveyField; 19] = [
        Self::Text(TextField::SleepHours),
        Self::Rating(RatingField::InterestRate),
        Self::Text(TextField::Position),
        Self::Text(TextField::ScreenTime),
        Self::Text(TextField::AcadPressure),
        Self::Rating(RatingField::DifficultyFallingAsleep),
        Self::Rating(RatingField::WakingUp),
        Self::Rating(RatingField::DiffBackToSleep),
        Self::Rating(RatingField::TossTurn),
        Self::Rating(RatingField::Unrefreshed),
        Self::Rating(RatingField::HeadAches),
        Self::Rating(RatingField::Irritated),
        Self::Rating(RatingField::Intervenes),
        Self::Rating(RatingField::GettingOutOfBed),
        Self::Rating(RatingField::Concentration),
        Self::Rating(RatingField::Temp),
        Self::Rating(RatingField::Ventilation),
        Self::Rating(RatingField::NoiseLevel),
        Self::Rating(RatingField::Lighting),
    ];

    /// The key used for this field on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rating(field) => field.as_str(),
            Self::Text(field) => field.as_str(),
        }
    }
}

impl fmt::Display for SurveyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RatingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<RatingField> for SurveyField {
    fn from(field: RatingField) -> Self {
        Self::Rating(field)
    }
}

impl From<TextField> for SurveyField {
    fn from(field: TextField) -> Self {
        Self::Text(field)
    }
}
