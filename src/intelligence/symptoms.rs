//! Symptom review against a fixed keyword catalog.
//!
//! Categories are not exclusive. A description that mentions several of
//! them collects every matching category's entries, in catalog order.

use serde::Serialize;

use crate::models::{MedicalItem, VitalsSnapshot};

use super::helpers::{contains_any, to_owned_list};
use super::types::SymptomAnalysis;

// ═══════════════════════════════════════════
// Catalog
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCategoryKey {
    ChestPain,
    Headache,
    Dyspnea,
}

/// One catalog row: trigger keywords (lower case) and the fixed content
/// contributed when any of them appears.
#[derive(Debug)]
pub struct SymptomCategory {
    pub key: SymptomCategoryKey,
    pub keywords: &'static [&'static str],
    pub possible_causes: &'static [&'static str],
    pub red_flags: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

impl SymptomCategory {
    /// `lowered` must already be lower case.
    pub fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, self.keywords)
    }
}

pub static SYMPTOM_CATALOG: [SymptomCategory; 3] = [
    SymptomCategory {
        key: SymptomCategoryKey::ChestPain,
        keywords: &["chest pain", "chest pressure"],
        possible_causes: &[
            "Cardiac: Angina, MI, pericarditis",
            "Pulmonary: PE, pneumonia, pleuritis",
            "GI: GERD, esophageal spasm",
            "Musculoskeletal: Costochondritis, muscle strain",
        ],
        red_flags: &[
            "Crushing/squeezing pain",
            "Radiation to arm/jaw",
            "Shortness of breath",
            "Sweating, nausea",
        ],
        recommendations: &[
            "Immediate medical evaluation if red flags present",
            "EKG and cardiac enzymes",
            "Consider stress testing",
        ],
    },
    SymptomCategory {
        key: SymptomCategoryKey::Headache,
        keywords: &["headache"],
        possible_causes: &[
            "Tension-type (90%): Stress, poor posture, eye strain",
            "Migraine: Unilateral, throbbing, photophobia",
            "Cluster: Severe, periorbital, seasonal pattern",
            "Secondary: Hypertension, medication overuse, infection",
        ],
        red_flags: &[
            "Sudden severe \"thunderclap\" headache",
            "Headache with fever and neck stiffness",
            "New headache pattern after age 50",
            "Headache with neurological deficits",
        ],
        recommendations: &[
            "Headache diary",
            "Identify triggers",
            "Consider prophylactic treatment if >4/month",
        ],
    },
    SymptomCategory {
        key: SymptomCategoryKey::Dyspnea,
        keywords: &["shortness of breath", "dyspnea"],
        possible_causes: &[
            "Cardiac: Heart failure, arrhythmia, valvular disease",
            "Pulmonary: Asthma, COPD, pneumonia, PE",
            "Systemic: Anemia, thyroid disorders, deconditioning",
        ],
        red_flags: &[
            "Orthopnea",
            "Paroxysmal nocturnal dyspnea",
            "Chest pain",
            "Hemoptysis",
        ],
        recommendations: &[
            "Echocardiogram",
            "Chest X-ray",
            "BNP/NT-proBNP",
            "Pulmonary function tests",
        ],
    },
];

pub fn category(key: SymptomCategoryKey) -> &'static SymptomCategory {
    match key {
        SymptomCategoryKey::ChestPain => &SYMPTOM_CATALOG[0],
        SymptomCategoryKey::Headache => &SYMPTOM_CATALOG[1],
        SymptomCategoryKey::Dyspnea => &SYMPTOM_CATALOG[2],
    }
}

// ═══════════════════════════════════════════
// Analysis
// ═══════════════════════════════════════════

/// Catalog categories whose keywords appear in `description`.
pub fn matching_categories(description: &str) -> Vec<&'static SymptomCategory> {
    let lowered = description.to_lowercase();
    SYMPTOM_CATALOG
        .iter()
        .filter(|c| c.matches(&lowered))
        .collect()
}

pub fn analyze_symptom(description: &str) -> SymptomAnalysis {
    let mut analysis = SymptomAnalysis::empty(description);
    for category in matching_categories(description) {
        analysis
            .possible_causes
            .extend(to_owned_list(category.possible_causes));
        analysis.red_flags.extend(to_owned_list(category.red_flags));
        analysis
            .recommendations
            .extend(to_owned_list(category.recommendations));
    }
    analysis
}

/// One analysis per description, same order and length as the input.
///
/// Vitals and conditions are accepted for future cross-checks; matching
/// currently reads only the description text.
pub fn analyze_symptoms<S: AsRef<str>>(
    descriptions: &[S],
    _vitals: &VitalsSnapshot,
    _conditions: &[MedicalItem],
) -> Vec<SymptomAnalysis> {
    let analyses: Vec<SymptomAnalysis> = descriptions
        .iter()
        .map(|d| analyze_symptom(d.as_ref()))
        .collect();

    tracing::debug!(
        symptoms = analyses.len(),
        with_red_flags = analyses.iter().filter(|a| a.has_red_flags()).count(),
        "Symptoms analyzed"
    );

    analyses
}
