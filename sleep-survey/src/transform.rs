//! Conversion of a completed questionnaire into the prediction request body.

use serde::{Deserialize, Serialize};

use crate::{RatingField, ScaleError, SurveyRecord, TextField, label_for};

/// The JSON body sent to the prediction endpoint.
///
/// Ratings are replaced by their scale labels and the experience set is
/// flattened into one comma-separated string. Field order is fixed, so equal
/// records serialize to identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionPayload {
    pub sleep_hours: String,
    pub interest_rate: String,
    pub position: String,
    pub screen_time: String,
    pub acad_pressure: String,
    pub difficulty_falling_asleep: String,
    pub waking_up: String,
    pub diff_back_to_sleep: String,
    pub toss_turn: String,
    pub unrefreshed: String,
    pub head_aches: String,
    pub irritated: String,
    pub intervenes: String,
    pub getting_out_of_bed: String,
    pub concentration: String,
    pub temp: String,
    pub ventilation: String,
    pub noise_level: String,
    pub lighting: String,
    pub experiences: String,
}

/// Build the request payload from a record.
///
/// The record is expected to be valid already; nothing is re-validated here.
/// Text fields are passed through verbatim, and an unset text field becomes
/// `""`. An unset rating has no label, so it fails instead.
///
/// # Errors
/// `ScaleError::UnknownRating` if any rating is unset or outside its scale.
pub fn transform(record: &SurveyRecord) -> Result<PredictionPayload, ScaleError> {
    let label = |field: RatingField| -> Result<String, ScaleError> {
        let value = record
            .rating(field)
            .ok_or(ScaleError::UnknownRating {
                field: field.into(),
                value: None,
            })?;
        label_for(field.into(), value).map(str::to_owned)
    };
    let text = |field: TextField| record.text(field).unwrap_or_default().to_owned();

    Ok(PredictionPayload {
        sleep_hours: text(TextField::SleepHours),
        interest_rate: label(RatingField::InterestRate)?,
        position: text(TextField::Position),
        screen_time: text(TextField::ScreenTime),
        acad_pressure: text(TextField::AcadPressure),
        difficulty_falling_asleep: label(RatingField::DifficultyFallingAsleep)?,
        waking_up: label(RatingField::WakingUp)?,
        diff_back_to_sleep: label(RatingField::DiffBackToSleep)?,
        toss_turn: label(RatingField::TossTurn)?,
        unrefreshed: label(RatingField::Unrefreshed)?,
        head_aches: label(RatingField::HeadAches)?,
        irritated: label(RatingField::Irritated)?,
        intervenes: label(RatingField::Intervenes)?,
        getting_out_of_bed: label(RatingField::GettingOutOfBed)?,
        concentration: label(RatingField::Concentration)?,
        temp: label(RatingField::Temp)?,
        ventilation: label(RatingField::Ventilation)?,
        noise_level: label(RatingField::NoiseLevel)?,
        lighting: label(RatingField::Lighting)?,
        experiences: record.experiences().joined(),
    })
}
