//! Per-topic synthesis of consultation records.
//!
//! Each topic builds its narrative from the current records and the latest
//! insights. Staging uses descending ladders: the first satisfied rung is
//! the only one reported.

use chrono::{Local, NaiveDateTime};

use crate::config;
use crate::intelligence::helpers::{join_or, to_owned_list};
use crate::intelligence::HealthInsights;
use crate::models::{MedicalRecords, Profile, VitalField, VitalsSnapshot};

use super::classify::classify_query;
use super::types::{ConsultationRecord, ConsultationTopic, RecordBody};

/// Everything a consultation may read. Borrowed for the length of one call.
#[derive(Debug, Clone, Copy)]
pub struct ConsultationContext<'a> {
    pub insights: &'a HealthInsights,
    pub profile: &'a Profile,
    pub vitals: &'a VitalsSnapshot,
    pub records: &'a MedicalRecords,
}

// ═══════════════════════════════════════════
// Ladders
// ═══════════════════════════════════════════

const BP_STAGES: [(i64, &str); 3] = [
    (140, "Stage 2 hypertension (≥140 mmHg)"),
    (130, "Stage 1 hypertension (130-139 mmHg)"),
    (120, "Elevated blood pressure (120-129 mmHg)"),
];
const BP_NORMAL: &str = "Normal blood pressure (<120 mmHg)";

const A1C_STAGES: [(f64, &str); 2] = [
    (6.5, "Meets diagnostic criteria for diabetes mellitus"),
    (5.7, "Prediabetes range - high risk for progression"),
];
const A1C_NORMAL: &str = "Normal glucose metabolism";

/// Systolic pressure at which drug therapy is offered.
const BP_PHARMACOLOGIC: i64 = 140;
/// HbA1c (%) at which drug therapy is offered.
const A1C_PHARMACOLOGIC: f64 = 6.5;

pub fn bp_stage(systolic: i64) -> &'static str {
    BP_STAGES
        .iter()
        .find(|(threshold, _)| systolic >= *threshold)
        .map_or(BP_NORMAL, |(_, text)| *text)
}

pub fn a1c_stage(a1c: f64) -> &'static str {
    A1C_STAGES
        .iter()
        .find(|(threshold, _)| a1c >= *threshold)
        .map_or(A1C_NORMAL, |(_, text)| *text)
}

// ═══════════════════════════════════════════
// Topic bodies
// ═══════════════════════════════════════════

fn cardio_level(ctx: &ConsultationContext<'_>) -> &'static str {
    ctx.insights
        .cardiovascular_risk
        .as_ref()
        .map_or("undetermined", |r| r.risk_level.as_str())
}

fn blood_pressure_body(ctx: &ConsultationContext<'_>) -> RecordBody {
    let systolic = ctx.vitals.int(VitalField::SystolicBp);
    let reading = format!(
        "{}/{}",
        ctx.vitals.raw(VitalField::SystolicBp),
        ctx.vitals.raw(VitalField::DiastolicBp)
    );

    let treatment: &[&str] = if systolic >= BP_PHARMACOLOGIC {
        &[
            "ACE inhibitor or ARB",
            "Thiazide diuretic",
            "Calcium channel blocker",
            "Lifestyle modifications",
        ]
    } else {
        &[
            "Lifestyle modifications",
            "DASH diet",
            "Regular exercise",
            "Weight management",
        ]
    };

    RecordBody {
        clinical_analysis: format!(
            "Blood pressure analysis: {reading} mmHg. {}. Patient profile shows {} cardiovascular risk.",
            bp_stage(systolic),
            cardio_level(ctx)
        ),
        differential_diagnosis: Vec::new(),
        recommended_tests: to_owned_list(&[
            "24-hour ambulatory BP monitoring",
            "Basic metabolic panel",
            "Lipid panel",
            "Urinalysis",
            "ECG",
        ]),
        treatment_options: to_owned_list(treatment),
        follow_up_guidance: "Monitor BP weekly, reassess in 4-6 weeks, target <130/80 mmHg".into(),
    }
}

fn diabetes_body(ctx: &ConsultationContext<'_>) -> RecordBody {
    let a1c = ctx.vitals.float(VitalField::HemoglobinA1c);
    let factors = ctx
        .insights
        .diabetic_risk
        .as_ref()
        .map(|d| d.risk_factors().to_vec())
        .unwrap_or_default();

    let treatment: &[&str] = if a1c >= A1C_PHARMACOLOGIC {
        &[
            "Metformin first-line",
            "Lifestyle counseling",
            "Diabetes education",
            "Consider additional agents if A1c >7%",
        ]
    } else {
        &[
            "Lifestyle intervention program",
            "Weight loss counseling",
            "Exercise prescription",
        ]
    };

    RecordBody {
        clinical_analysis: format!(
            "Diabetes assessment: HbA1c {}%. {}. BMI: {}, additional risk factors: {}.",
            ctx.vitals.raw(VitalField::HemoglobinA1c),
            a1c_stage(a1c),
            ctx.profile.bmi,
            join_or(&factors, ", ", "none identified")
        ),
        differential_diagnosis: Vec::new(),
        recommended_tests: to_owned_list(&[
            "Fasting glucose",
            "Oral glucose tolerance test",
            "Lipid panel",
            "Microalbumin",
            "Diabetic eye exam",
        ]),
        treatment_options: to_owned_list(treatment),
        follow_up_guidance: "Monitor A1c every 3-6 months, target <7% for most patients".into(),
    }
}

fn cardiac_body(ctx: &ConsultationContext<'_>) -> RecordBody {
    RecordBody {
        clinical_analysis: format!(
            "Chest pain evaluation requires systematic approach. Based on patient age, gender, \
             and risk factors, cardiovascular risk is {}. Consider cardiac, pulmonary, GI, \
             and musculoskeletal etiologies.",
            cardio_level(ctx)
        ),
        differential_diagnosis: to_owned_list(&[
            "Acute coronary syndrome (unstable angina/NSTEMI/STEMI)",
            "Stable angina pectoris",
            "Pulmonary embolism",
            "Aortic dissection",
            "Gastroesophageal reflux disease",
            "Costochondritis",
        ]),
        recommended_tests: to_owned_list(&[
            "ECG",
            "Cardiac troponins",
            "Chest X-ray",
            "D-dimer if PE suspected",
            "Echocardiogram",
            "Stress testing",
        ]),
        treatment_options: Vec::new(),
        follow_up_guidance:
            "Immediate evaluation for acute symptoms, risk stratification for chronic symptoms"
                .into(),
    }
}

fn general_body(query: &str, ctx: &ConsultationContext<'_>) -> RecordBody {
    let conditions: Vec<String> = ctx
        .records
        .condition_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    RecordBody {
        clinical_analysis: format!(
            "General health inquiry regarding: {query}. Based on available patient data: \
             Age {}, BMI {}, known conditions: {}. {}",
            ctx.profile.age,
            ctx.profile.bmi,
            join_or(&conditions, ", ", "none"),
            ctx.insights.overall_assessment
        ),
        follow_up_guidance: "Recommend comprehensive history and physical examination with \
                             appropriate specialist referral as indicated."
            .into(),
        ..RecordBody::default()
    }
}

// ═══════════════════════════════════════════
// Entry points
// ═══════════════════════════════════════════

/// Answer `query` against the current records, stamped with local time.
///
/// Returns `None` for blank input; nothing is produced in that case.
pub fn generate_consultation(
    query: &str,
    ctx: &ConsultationContext<'_>,
) -> Option<ConsultationRecord> {
    generate_consultation_at(query, ctx, Local::now().naive_local())
}

pub fn generate_consultation_at(
    query: &str,
    ctx: &ConsultationContext<'_>,
    timestamp: NaiveDateTime,
) -> Option<ConsultationRecord> {
    if query.trim().is_empty() {
        return None;
    }

    let topic = classify_query(query);
    let body = match topic {
        ConsultationTopic::BloodPressure => blood_pressure_body(ctx),
        ConsultationTopic::Diabetes => diabetes_body(ctx),
        ConsultationTopic::Cardiac => cardiac_body(ctx),
        ConsultationTopic::General => general_body(query, ctx),
    };

    tracing::debug!(
        topic = ?topic,
        tests = body.recommended_tests.len(),
        treatments = body.treatment_options.len(),
        "Consultation generated"
    );

    Some(ConsultationRecord::new(
        query,
        topic,
        body,
        config::EVIDENCE_LEVEL,
        timestamp,
    ))
}
