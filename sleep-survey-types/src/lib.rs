//! Core types for the sleep-survey crate.
//!
//! This crate provides the foundational types for the sleep questionnaire:
//! - `SurveyField`, `RatingField`, `TextField` - The 19 required answer fields
//! - `Answer` and `SurveyRecord` - Collected answers keyed by field
//! - `Experience` and `ExperienceSet` - The mutually exclusive multi-select
//! - `SurveyState` - The mutable in-progress questionnaire
//! - `scale` - Rating scale tables and label lookup

mod field;
pub use field::{RatingField, SurveyField, TextField};

mod answer;
pub use answer::Answer;

mod experience;
pub use experience::{Experience, ExperienceSet};

mod record;
pub use record::{Missing, SurveyRecord};

mod state;
pub use state::SurveyState;

pub mod scale;
pub use scale::{ScaleKind, label_for, scale_for};

mod error;
pub use error::ScaleError;
