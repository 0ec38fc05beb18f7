//! Cardiovascular risk scoring.
//!
//! Every rule is evaluated on every call and contributes its weight when it
//! holds; the score is the plain sum. The systolic rule is the one tiered
//! rule: only the highest satisfied band counts.

use crate::models::{Gender, Profile, SmokingHistory, VitalField, VitalsSnapshot};
use crate::models::numeric::parse_int_or_zero;

use super::messages::MessageTemplates;
use super::types::{RiskAssessment, RiskLevel};

/// Numeric and categorical inputs, already coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct CardioInputs<'a> {
    pub age: i64,
    pub gender: Option<Gender>,
    pub systolic: i64,
    pub total_cholesterol: i64,
    pub hdl: i64,
    pub smoking: Option<SmokingHistory>,
    pub family_history: &'a str,
}

impl<'a> CardioInputs<'a> {
    pub fn from_records(profile: &'a Profile, vitals: &VitalsSnapshot) -> Self {
        Self {
            age: parse_int_or_zero(&profile.age),
            gender: profile.gender,
            systolic: vitals.int(VitalField::SystolicBp),
            total_cholesterol: vitals.int(VitalField::TotalCholesterol),
            hdl: vitals.int(VitalField::HdlCholesterol),
            smoking: profile.smoking_history,
            family_history: &profile.family_history,
        }
    }
}

/// A triggered rule: its label and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHit {
    pub label: &'static str,
    pub weight: u32,
}

const fn hit(label: &'static str, weight: u32) -> Option<RuleHit> {
    Some(RuleHit { label, weight })
}

type CardioRule = fn(&CardioInputs<'_>) -> Option<RuleHit>;

/// Systolic bands, highest first. First satisfied band wins.
const SYSTOLIC_TIERS: [(i64, RuleHit); 2] = [
    (
        140,
        RuleHit {
            label: MessageTemplates::HYPERTENSION,
            weight: 2,
        },
    ),
    (
        130,
        RuleHit {
            label: MessageTemplates::ELEVATED_BP,
            weight: 1,
        },
    ),
];

pub fn systolic_tier(systolic: i64) -> Option<RuleHit> {
    SYSTOLIC_TIERS
        .iter()
        .find(|(threshold, _)| systolic >= *threshold)
        .map(|(_, rule)| *rule)
}

/// Rules in evaluation order; that order is the order of `risk_factors`.
const CARDIO_RULES: [CardioRule; 8] = [
    |i| {
        if i.age > 65 {
            hit(MessageTemplates::AGE_OVER_65, 2)
        } else {
            None
        }
    },
    |i| {
        if i.age > 45 && i.gender == Some(Gender::Male) {
            hit(MessageTemplates::MALE_OVER_45, 1)
        } else {
            None
        }
    },
    |i| {
        if i.age > 55 && i.gender == Some(Gender::Female) {
            hit(MessageTemplates::FEMALE_OVER_55, 1)
        } else {
            None
        }
    },
    |i| systolic_tier(i.systolic),
    |i| {
        if i.total_cholesterol >= 240 {
            hit(MessageTemplates::HIGH_CHOLESTEROL, 2)
        } else {
            None
        }
    },
    |i| {
        if i.hdl < 40 {
            hit(MessageTemplates::LOW_HDL, 1)
        } else {
            None
        }
    },
    |i| {
        if i.smoking == Some(SmokingHistory::Current) {
            hit(MessageTemplates::CURRENT_SMOKER, 2)
        } else {
            None
        }
    },
    // Case-sensitive.
    |i| {
        if i.family_history.contains("heart") {
            hit(MessageTemplates::FAMILY_HEART_DISEASE, 1)
        } else {
            None
        }
    },
];

/// Every rule that holds for `inputs`, in evaluation order.
pub fn triggered_rules(inputs: &CardioInputs<'_>) -> Vec<RuleHit> {
    CARDIO_RULES.iter().filter_map(|rule| rule(inputs)).collect()
}

pub fn score_inputs(inputs: &CardioInputs<'_>) -> RiskAssessment {
    let hits = triggered_rules(inputs);
    let risk_score: u32 = hits.iter().map(|h| h.weight).sum();
    let risk_level = RiskLevel::from_score(risk_score);

    tracing::debug!(
        score = risk_score,
        level = risk_level.as_str(),
        factors = hits.len(),
        "Cardiovascular risk scored"
    );

    RiskAssessment {
        risk_level,
        risk_score,
        risk_factors: hits.iter().map(|h| h.label.to_string()).collect(),
    }
}

/// Score cardiovascular risk.
///
/// Callers should only invoke this once age and systolic pressure are both
/// known; missing values still score (as zero) rather than fail.
pub fn assess_cardiovascular_risk(profile: &Profile, vitals: &VitalsSnapshot) -> RiskAssessment {
    score_inputs(&CardioInputs::from_records(profile, vitals))
}
