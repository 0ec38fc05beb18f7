use crate::models::numeric::{parse_float_or_zero, parse_int_or_zero};
use crate::models::{Profile, VitalField, VitalsSnapshot};

use super::helpers::{contains_any_ignore_case, to_owned_list};
use super::messages::MessageTemplates;
use super::types::{DiabeticAssessment, Urgency};

/// HbA1c (%) at which diagnostic criteria for diabetes are met.
pub const A1C_DIAGNOSTIC: f64 = 6.5;
/// HbA1c (%) at the bottom of the prediabetes range.
pub const A1C_PREDIABETES: f64 = 5.7;
pub const BMI_OBESE: f64 = 30.0;
pub const AGE_AT_RISK: i64 = 45;

const HIGH_RISK_ETHNICITIES: &[&str] = &["hispanic", "african", "asian"];

/// Classify diabetes risk.
///
/// A diagnostic-range A1C returns at once and skips the factor checks.
/// Otherwise each check runs independently. Blood glucose is part of the
/// vitals but not read here.
pub fn assess_diabetic_risk(profile: &Profile, vitals: &VitalsSnapshot) -> DiabeticAssessment {
    let a1c = vitals.float(VitalField::HemoglobinA1c);

    if a1c >= A1C_DIAGNOSTIC {
        tracing::debug!(a1c, "Diabetic risk: diagnostic criteria met");
        return DiabeticAssessment::DiagnosticCriteriaMet {
            status: MessageTemplates::DIABETES_CRITERIA_STATUS.to_string(),
            message: MessageTemplates::DIABETES_CRITERIA_MESSAGE.to_string(),
            urgency: Urgency::High,
        };
    }

    let bmi = parse_float_or_zero(&profile.bmi);
    let age = parse_int_or_zero(&profile.age);

    let mut risk_factors = Vec::new();
    let mut recommendations = Vec::new();

    if a1c >= A1C_PREDIABETES {
        risk_factors.push(MessageTemplates::prediabetes(a1c));
        recommendations.extend(to_owned_list(&MessageTemplates::PREDIABETES_RECOMMENDATIONS));
    }
    if bmi >= BMI_OBESE {
        risk_factors.push(MessageTemplates::obesity(bmi));
    }
    if age >= AGE_AT_RISK {
        risk_factors.push(MessageTemplates::AGE_45_OR_OVER.to_string());
    }
    if contains_any_ignore_case(&profile.family_history, &["diabetes"]) {
        risk_factors.push(MessageTemplates::FAMILY_DIABETES.to_string());
    }
    if contains_any_ignore_case(&profile.ethnicity, HIGH_RISK_ETHNICITIES) {
        risk_factors.push(MessageTemplates::HIGH_RISK_ETHNICITY.to_string());
    }

    tracing::debug!(factors = risk_factors.len(), "Diabetic risk assessed");

    DiabeticAssessment::Assessment {
        risk_factors,
        recommendations,
        status: MessageTemplates::ASSESSMENT_COMPLETE.to_string(),
    }
}
