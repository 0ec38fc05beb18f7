use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::str_enum;
use super::numeric::{is_present, parse_float_or_zero, parse_int_or_zero};
use super::ModelError;

str_enum!(VitalField {
    SystolicBp => "systolicBP",
    DiastolicBp => "diastolicBP",
    HeartRate => "heartRate",
    Temperature => "temperature",
    RespiratoryRate => "respiratoryRate",
    OxygenSat => "oxygenSat",
    BloodGlucose => "bloodGlucose",
    HemoglobinA1c => "hemoglobinA1C",
    TotalCholesterol => "totalCholesterol",
    LdlCholesterol => "ldlCholesterol",
    HdlCholesterol => "hdlCholesterol",
    Triglycerides => "triglycerides",
    Creatinine => "creatinine",
    Bun => "bun",
    Gfr => "gfr",
    Albumin => "albumin",
    Hemoglobin => "hemoglobin",
    WhiteBc => "whiteBC",
    Platelets => "platelets",
    ThyroidTsh => "thyroidTSH",
    VitaminD => "vitaminD",
    VitaminB12 => "vitaminB12",
});

/// Form section a vital belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalPanel {
    Cardiovascular,
    Metabolic,
    Renal,
    Other,
}

impl VitalPanel {
    pub const ALL: [VitalPanel; 4] = [
        Self::Cardiovascular,
        Self::Metabolic,
        Self::Renal,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Cardiovascular => "Cardiovascular",
            Self::Metabolic => "Metabolic",
            Self::Renal => "Renal & Hematologic",
            Self::Other => "Other",
        }
    }

    /// Fields shown in this panel, in form order.
    pub fn fields(self) -> impl Iterator<Item = VitalField> {
        VitalField::ALL.into_iter().filter(move |f| f.panel() == self)
    }
}

impl VitalField {
    pub const ALL: [VitalField; 22] = [
        Self::SystolicBp,
        Self::DiastolicBp,
        Self::HeartRate,
        Self::Temperature,
        Self::RespiratoryRate,
        Self::OxygenSat,
        Self::BloodGlucose,
        Self::HemoglobinA1c,
        Self::TotalCholesterol,
        Self::LdlCholesterol,
        Self::HdlCholesterol,
        Self::Triglycerides,
        Self::Creatinine,
        Self::Bun,
        Self::Gfr,
        Self::Albumin,
        Self::Hemoglobin,
        Self::WhiteBc,
        Self::Platelets,
        Self::ThyroidTsh,
        Self::VitaminD,
        Self::VitaminB12,
    ];

    /// Display unit for this field.
    pub fn unit(self) -> &'static str {
        match self {
            Self::SystolicBp | Self::DiastolicBp => "mmHg",
            Self::HeartRate => "bpm",
            Self::Temperature => "°C",
            Self::RespiratoryRate => "breaths/min",
            Self::OxygenSat | Self::HemoglobinA1c => "%",
            Self::BloodGlucose
            | Self::TotalCholesterol
            | Self::LdlCholesterol
            | Self::HdlCholesterol
            | Self::Triglycerides
            | Self::Creatinine
            | Self::Bun => "mg/dL",
            Self::Gfr => "mL/min",
            Self::Albumin | Self::Hemoglobin => "g/dL",
            Self::WhiteBc | Self::Platelets => "K/µL",
            Self::ThyroidTsh => "mIU/L",
            Self::VitaminD => "ng/mL",
            Self::VitaminB12 => "pg/mL",
        }
    }

    pub fn panel(self) -> VitalPanel {
        match self {
            Self::SystolicBp
            | Self::DiastolicBp
            | Self::HeartRate
            | Self::Temperature
            | Self::RespiratoryRate
            | Self::OxygenSat => VitalPanel::Cardiovascular,
            Self::BloodGlucose
            | Self::HemoglobinA1c
            | Self::TotalCholesterol
            | Self::LdlCholesterol
            | Self::HdlCholesterol
            | Self::Triglycerides => VitalPanel::Metabolic,
            Self::Creatinine
            | Self::Bun
            | Self::Gfr
            | Self::Albumin
            | Self::Hemoglobin
            | Self::WhiteBc
            | Self::Platelets => VitalPanel::Renal,
            Self::ThyroidTsh | Self::VitaminD | Self::VitaminB12 => VitalPanel::Other,
        }
    }
}

/// Latest value per vital, as typed. Absent keys read as blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VitalsSnapshot {
    values: BTreeMap<VitalField, String>,
}

impl VitalsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for fixtures.
    pub fn with(mut self, field: VitalField, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn set(&mut self, field: VitalField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Raw text for a field; blank when never entered.
    pub fn raw(&self, field: VitalField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn int(&self, field: VitalField) -> i64 {
        parse_int_or_zero(self.raw(field))
    }

    pub fn float(&self, field: VitalField) -> f64 {
        parse_float_or_zero(self.raw(field))
    }

    pub fn is_present(&self, field: VitalField) -> bool {
        is_present(self.raw(field))
    }

    /// Overwrite the keys carried by `update`; every other key is kept.
    pub fn merge(&mut self, update: VitalsSnapshot) {
        self.values.extend(update.values);
    }

    /// Build an update from wire-name pairs such as `("systolicBP", "145")`.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut snapshot = Self::new();
        for (key, value) in pairs {
            let field: VitalField = key.parse()?;
            snapshot.set(field, value);
        }
        Ok(snapshot)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Reference-range notes shown next to the vitals form.
pub fn reference_ranges() -> &'static [(&'static str, &'static str)] {
    &[
        ("Blood Pressure (Normal)", "<120/80 mmHg"),
        ("Heart Rate", "60-100 bpm"),
        ("Fasting Glucose (Normal)", "<100 mg/dL"),
        ("HbA1c (Normal)", "<5.7%"),
        ("Total Cholesterol", "<200 mg/dL (desirable)"),
        ("GFR (Normal)", ">60 mL/min"),
    ]
}
