use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Topic a consultation query is routed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationTopic {
    BloodPressure,
    Diabetes,
    Cardiac,
    General,
}

/// One answered consultation. Fields are private so a record cannot be
/// altered after it is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRecord {
    question: String,
    topic: ConsultationTopic,
    clinical_analysis: String,
    differential_diagnosis: Vec<String>,
    recommended_tests: Vec<String>,
    treatment_options: Vec<String>,
    follow_up_guidance: String,
    evidence_level: String,
    timestamp: NaiveDateTime,
}

/// Topic-specific content of a record, before it is stamped.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RecordBody {
    pub clinical_analysis: String,
    pub differential_diagnosis: Vec<String>,
    pub recommended_tests: Vec<String>,
    pub treatment_options: Vec<String>,
    pub follow_up_guidance: String,
}

impl ConsultationRecord {
    pub(crate) fn new(
        question: &str,
        topic: ConsultationTopic,
        body: RecordBody,
        evidence_level: &str,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            question: question.to_string(),
            topic,
            clinical_analysis: body.clinical_analysis,
            differential_diagnosis: body.differential_diagnosis,
            recommended_tests: body.recommended_tests,
            treatment_options: body.treatment_options,
            follow_up_guidance: body.follow_up_guidance,
            evidence_level: evidence_level.to_string(),
            timestamp,
        }
    }

    /// The query exactly as the user typed it.
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn topic(&self) -> ConsultationTopic {
        self.topic
    }

    pub fn clinical_analysis(&self) -> &str {
        &self.clinical_analysis
    }

    pub fn differential_diagnosis(&self) -> &[String] {
        &self.differential_diagnosis
    }

    pub fn recommended_tests(&self) -> &[String] {
        &self.recommended_tests
    }

    pub fn treatment_options(&self) -> &[String] {
        &self.treatment_options
    }

    pub fn follow_up_guidance(&self) -> &str {
        &self.follow_up_guidance
    }

    pub fn evidence_level(&self) -> &str {
        &self.evidence_level
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn record_serializes_camel_case() {
        let at = NaiveDate::from_ymd_opt(2026, 3, 4)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let record = ConsultationRecord::new(
            "Is my heart ok?",
            ConsultationTopic::Cardiac,
            RecordBody {
                clinical_analysis: "analysis".into(),
                follow_up_guidance: "follow up".into(),
                ..RecordBody::default()
            },
            "Clinical Guidelines",
            at,
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["question"], "Is my heart ok?");
        assert_eq!(json["topic"], "cardiac");
        assert_eq!(json["clinicalAnalysis"], "analysis");
        assert_eq!(json["followUpGuidance"], "follow up");
        assert_eq!(json["evidenceLevel"], "Clinical Guidelines");
        assert_eq!(json["timestamp"], "2026-03-04T09:30:00");
        assert!(json["treatmentOptions"].as_array().unwrap().is_empty());
    }
}
