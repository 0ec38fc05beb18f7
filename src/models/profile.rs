use serde::{Deserialize, Serialize};

use super::enums::{
    parse_optional, str_enum, AlcoholUse, ExerciseFrequency, Gender, SmokingHistory,
};
use super::numeric::parse_leading_float;
use super::ModelError;

str_enum!(ProfileField {
    Initials => "initials",
    Age => "age",
    Gender => "gender",
    Height => "height",
    Weight => "weight",
    Bmi => "bmi",
    Ethnicity => "ethnicity",
    Occupation => "occupation",
    FamilyHistory => "familyHistory",
    SmokingHistory => "smokingHistory",
    AlcoholUse => "alcoholUse",
    ExerciseFrequency => "exerciseFrequency",
    SleepHours => "sleepHours",
});

/// Demographics and lifestyle, as entered on the profile form.
///
/// Numeric fields stay raw text; readers coerce them at use time.
/// `bmi` is derived from `height` (cm) and `weight` (kg).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub initials: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub height: String,
    pub weight: String,
    pub bmi: String,
    pub ethnicity: String,
    pub occupation: String,
    pub family_history: String,
    pub smoking_history: Option<SmokingHistory>,
    pub alcohol_use: Option<AlcoholUse>,
    pub exercise_frequency: Option<ExerciseFrequency>,
    pub sleep_hours: String,
}

impl Profile {
    /// Replace one field. Editing height or weight re-derives BMI.
    pub fn update_field(&mut self, field: ProfileField, value: &str) -> Result<(), ModelError> {
        match field {
            ProfileField::Initials => self.initials = value.to_string(),
            ProfileField::Age => self.age = value.to_string(),
            ProfileField::Gender => self.gender = parse_optional(value)?,
            ProfileField::Height => self.height = value.to_string(),
            ProfileField::Weight => self.weight = value.to_string(),
            ProfileField::Bmi => self.bmi = value.to_string(),
            ProfileField::Ethnicity => self.ethnicity = value.to_string(),
            ProfileField::Occupation => self.occupation = value.to_string(),
            ProfileField::FamilyHistory => self.family_history = value.to_string(),
            ProfileField::SmokingHistory => self.smoking_history = parse_optional(value)?,
            ProfileField::AlcoholUse => self.alcohol_use = parse_optional(value)?,
            ProfileField::ExerciseFrequency => self.exercise_frequency = parse_optional(value)?,
            ProfileField::SleepHours => self.sleep_hours = value.to_string(),
        }

        if matches!(field, ProfileField::Height | ProfileField::Weight) {
            self.recompute_bmi();
        }
        Ok(())
    }

    /// Re-derive `bmi` when both height and weight read as positive numbers.
    /// Otherwise the previous value is kept.
    pub fn recompute_bmi(&mut self) {
        let height = parse_leading_float(&self.height);
        let weight = parse_leading_float(&self.weight);
        if let (Some(h), Some(w)) = (height, weight) {
            if let Some(bmi) = compute_bmi(h, w) {
                self.bmi = format!("{bmi:.1}");
            }
        }
    }
}

/// Body mass index from centimetres and kilograms, rounded to one decimal.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Some((bmi * 10.0).round() / 10.0)
}
