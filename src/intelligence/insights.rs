use crate::models::numeric::is_present;
use crate::models::{MedicalRecords, Profile, VitalField, VitalsSnapshot};

use super::cardio::assess_cardiovascular_risk;
use super::diabetic::assess_diabetic_risk;
use super::messages::MessageTemplates;
use super::symptoms::analyze_symptoms;
use super::types::{DiabeticAssessment, HealthInsights, RiskAssessment, RiskLevel, SymptomAnalysis};

/// Reduce the three engine outputs to one overall sentence.
pub fn overall_assessment(
    cardio: Option<&RiskAssessment>,
    diabetic: Option<&DiabeticAssessment>,
    symptoms: &[SymptomAnalysis],
) -> String {
    let mut notes = Vec::new();

    if cardio.is_some_and(|c| c.risk_level == RiskLevel::High) {
        notes.push(MessageTemplates::HIGH_CARDIO_RISK);
    }
    if diabetic.is_some_and(|d| d.status().contains("Diabetes")) {
        notes.push(MessageTemplates::DIABETES_EVALUATION);
    }
    if symptoms.iter().any(SymptomAnalysis::has_red_flags) {
        notes.push(MessageTemplates::URGENT_SYMPTOMS);
    }

    if notes.is_empty() {
        MessageTemplates::STABLE_STATUS.to_string()
    } else {
        notes.join(". ")
    }
}

/// Run each engine whose inputs are available and aggregate the results.
///
/// Cardiovascular scoring needs age and systolic pressure; the diabetic
/// classifier needs BMI or HbA1c; symptom review needs at least one symptom.
pub fn compute_insights(
    profile: &Profile,
    vitals: &VitalsSnapshot,
    records: &MedicalRecords,
) -> HealthInsights {
    let cardiovascular_risk = (is_present(&profile.age)
        && vitals.is_present(VitalField::SystolicBp))
    .then(|| assess_cardiovascular_risk(profile, vitals));

    let diabetic_risk = (is_present(&profile.bmi)
        || vitals.is_present(VitalField::HemoglobinA1c))
    .then(|| assess_diabetic_risk(profile, vitals));

    let symptom_analyses = if records.symptoms.is_empty() {
        Vec::new()
    } else {
        analyze_symptoms(
            &records.symptom_descriptions(),
            vitals,
            &records.conditions,
        )
    };

    let overall_assessment = overall_assessment(
        cardiovascular_risk.as_ref(),
        diabetic_risk.as_ref(),
        &symptom_analyses,
    );

    HealthInsights {
        cardiovascular_risk,
        diabetic_risk,
        symptom_analyses,
        overall_assessment,
    }
}
