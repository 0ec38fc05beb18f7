/// Fixed wording for risk factors, statuses and the overall assessment.
/// Kept in one place so the engines and their tests agree on every string.
pub struct MessageTemplates;

impl MessageTemplates {
    // ── Cardiovascular factors ─────────────────────────────

    pub const AGE_OVER_65: &'static str = "Age > 65";
    pub const MALE_OVER_45: &'static str = "Male > 45";
    pub const FEMALE_OVER_55: &'static str = "Female > 55";
    pub const HYPERTENSION: &'static str = "Hypertension (SBP ≥140)";
    pub const ELEVATED_BP: &'static str = "Elevated BP (SBP 130-139)";
    pub const HIGH_CHOLESTEROL: &'static str = "High cholesterol (≥240)";
    pub const LOW_HDL: &'static str = "Low HDL (<40)";
    pub const CURRENT_SMOKER: &'static str = "Current smoker";
    pub const FAMILY_HEART_DISEASE: &'static str = "Family history of heart disease";

    // ── Diabetic classifier ────────────────────────────────

    pub const DIABETES_CRITERIA_STATUS: &'static str = "Diabetes Diagnosis Criteria Met";
    pub const DIABETES_CRITERIA_MESSAGE: &'static str =
        "HbA1c ≥6.5% meets diagnostic criteria for diabetes. Immediate medical evaluation recommended.";
    pub const ASSESSMENT_COMPLETE: &'static str = "Assessment Complete";
    pub const AGE_45_OR_OVER: &'static str = "Age ≥45";
    pub const FAMILY_DIABETES: &'static str = "Family history of diabetes";
    pub const HIGH_RISK_ETHNICITY: &'static str = "High-risk ethnicity";
    pub const PREDIABETES_RECOMMENDATIONS: [&'static str; 3] = [
        "Lifestyle modification program",
        "Weight loss if overweight",
        "Regular exercise",
    ];

    /// Numbers print in shortest form: 5.7 stays "5.7", 31.0 becomes "31".
    pub fn prediabetes(a1c: f64) -> String {
        format!("Prediabetes (A1C: {a1c}%)")
    }

    pub fn obesity(bmi: f64) -> String {
        format!("Obesity (BMI: {bmi})")
    }

    // ── Overall assessment ─────────────────────────────────

    pub const HIGH_CARDIO_RISK: &'static str = "High cardiovascular risk detected";
    pub const DIABETES_EVALUATION: &'static str = "Diabetes evaluation needed";
    pub const URGENT_SYMPTOMS: &'static str = "Symptoms requiring urgent evaluation";
    pub const STABLE_STATUS: &'static str = "Current data suggests stable health status";
}
