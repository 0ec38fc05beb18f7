//! Advisory engine: cardiovascular scoring, diabetic classification,
//! symptom review and the overall assessment that summarises them.
//!
//! Everything here is a pure function over the session records. Nothing
//! fails: unusable input lowers scores or empties lists instead.

pub mod cardio;
pub mod diabetic;
pub mod helpers;
pub mod insights;
pub mod messages;
pub mod symptoms;
pub mod types;

pub use cardio::assess_cardiovascular_risk;
pub use diabetic::assess_diabetic_risk;
pub use insights::{compute_insights, overall_assessment};
pub use symptoms::{analyze_symptoms, SYMPTOM_CATALOG};
pub use types::{
    DiabeticAssessment, HealthInsights, RiskAssessment, RiskLevel, SymptomAnalysis, Urgency,
};
