//! Plain records supplied by the surrounding app: profile, vitals and the
//! categorised medical item lists.

pub mod enums;
pub mod medical_item;
pub mod numeric;
pub mod profile;
pub mod vitals;

use thiserror::Error;

pub use enums::{
    AlcoholUse, ExerciseFrequency, Gender, ItemCategory, SmokingHistory, SymptomFrequency,
    SymptomSeverity,
};
pub use medical_item::{MedicalItem, MedicalRecords};
pub use profile::{compute_bmi, Profile, ProfileField};
pub use vitals::{reference_ranges, VitalField, VitalPanel, VitalsSnapshot};

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid value for {field}: {value:?}")]
    InvalidEnum { field: String, value: String },
}
