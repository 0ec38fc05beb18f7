use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Cardiovascular risk band derived from the additive score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Score at or above which the level is `High`.
    pub const HIGH_THRESHOLD: u32 = 6;
    /// Score at or above which the level is `Moderate`.
    pub const MODERATE_THRESHOLD: u32 = 3;

    pub fn from_score(score: u32) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

// ---------------------------------------------------------------------------
// RiskAssessment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    /// Human-readable factors in rule evaluation order.
    pub risk_factors: Vec<String>,
}

// ---------------------------------------------------------------------------
// DiabeticAssessment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
}

/// Outcome of the diabetic classifier.
///
/// A diagnostic-range A1C short-circuits into `DiagnosticCriteriaMet`;
/// everything else accumulates into `Assessment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiabeticAssessment {
    #[serde(rename_all = "camelCase")]
    DiagnosticCriteriaMet {
        status: String,
        message: String,
        urgency: Urgency,
    },
    #[serde(rename_all = "camelCase")]
    Assessment {
        risk_factors: Vec<String>,
        recommendations: Vec<String>,
        status: String,
    },
}

impl DiabeticAssessment {
    pub fn status(&self) -> &str {
        match self {
            Self::DiagnosticCriteriaMet { status, .. } | Self::Assessment { status, .. } => status,
        }
    }

    /// Accumulated factors; empty for the diagnostic variant.
    pub fn risk_factors(&self) -> &[String] {
        match self {
            Self::DiagnosticCriteriaMet { .. } => &[],
            Self::Assessment { risk_factors, .. } => risk_factors,
        }
    }

    pub fn recommendations(&self) -> &[String] {
        match self {
            Self::DiagnosticCriteriaMet { .. } => &[],
            Self::Assessment { recommendations, .. } => recommendations,
        }
    }

    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Self::DiagnosticCriteriaMet { .. })
    }
}

// ---------------------------------------------------------------------------
// SymptomAnalysis
// ---------------------------------------------------------------------------

/// Catalog entries matched for one recorded symptom. All lists may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    pub symptom: String,
    pub possible_causes: Vec<String>,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<String>,
}

impl SymptomAnalysis {
    pub fn empty(symptom: &str) -> Self {
        Self {
            symptom: symptom.to_string(),
            possible_causes: Vec::new(),
            red_flags: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn has_red_flags(&self) -> bool {
        !self.red_flags.is_empty()
    }
}

// ---------------------------------------------------------------------------
// HealthInsights
// ---------------------------------------------------------------------------

/// Everything the dashboard shows, recomputed from the session on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInsights {
    pub cardiovascular_risk: Option<RiskAssessment>,
    pub diabetic_risk: Option<DiabeticAssessment>,
    pub symptom_analyses: Vec<SymptomAnalysis>,
    pub overall_assessment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(2), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(3), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(5), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(6), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(12), RiskLevel::High);
    }

    #[test]
    fn risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
    }

    #[test]
    fn diagnostic_variant_serializes_flat() {
        let assessment = DiabeticAssessment::DiagnosticCriteriaMet {
            status: "Diabetes Diagnosis Criteria Met".into(),
            message: "msg".into(),
            urgency: Urgency::High,
        };
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["urgency"], "high");
        assert_eq!(json["status"], "Diabetes Diagnosis Criteria Met");
        assert!(json.get("riskFactors").is_none());
        assert!(assessment.risk_factors().is_empty());
    }

    #[test]
    fn assessment_variant_uses_camel_case() {
        let assessment = DiabeticAssessment::Assessment {
            risk_factors: vec!["Age ≥45".into()],
            recommendations: vec![],
            status: "Assessment Complete".into(),
        };
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["riskFactors"][0], "Age ≥45");
        assert_eq!(assessment.status(), "Assessment Complete");
        assert!(!assessment.is_diagnostic());
    }

    #[test]
    fn empty_analysis_keeps_symptom_text() {
        let analysis = SymptomAnalysis::empty("Itchy rash");
        assert_eq!(analysis.symptom, "Itchy rash");
        assert!(!analysis.has_red_flags());
    }
}
