//! Session state: the one owned container for profile, vitals, medical
//! items and consultation history.
//!
//! Engines never hold on to this state. Each call borrows what it needs and
//! returns fresh values; mutations replace fields in place.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::consultation::{
    generate_consultation, ConsultationContext, ConsultationHistory, ConsultationRecord,
};
use crate::intelligence::{compute_insights, HealthInsights};
use crate::models::{
    ItemCategory, MedicalItem, MedicalRecords, ModelError, Profile, ProfileField, VitalsSnapshot,
};

// ═══════════════════════════════════════════════════════════
// SessionState
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct SessionState {
    /// Correlates log lines for one session. Not persisted.
    session_id: Uuid,
    profile: Profile,
    vitals: VitalsSnapshot,
    records: MedicalRecords,
    /// Text currently in the consultation box.
    query_draft: String,
    history: ConsultationHistory,
    next_item_id: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            profile: Profile::default(),
            vitals: VitalsSnapshot::new(),
            records: MedicalRecords::default(),
            query_draft: String::new(),
            history: ConsultationHistory::new(),
            next_item_id: 1,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn vitals(&self) -> &VitalsSnapshot {
        &self.vitals
    }

    pub fn records(&self) -> &MedicalRecords {
        &self.records
    }

    pub fn query_draft(&self) -> &str {
        &self.query_draft
    }

    pub fn history(&self) -> &ConsultationHistory {
        &self.history
    }

    // ── Profile ────────────────────────────────────────────

    pub fn update_profile_field(
        &mut self,
        field: ProfileField,
        value: &str,
    ) -> Result<(), ModelError> {
        self.profile.update_field(field, value)?;
        tracing::debug!(
            session = %self.session_id,
            field = field.as_str(),
            "Profile field updated"
        );
        Ok(())
    }

    /// Replace the whole profile. BMI is re-derived from height and weight.
    pub fn set_profile(&mut self, mut profile: Profile) {
        profile.recompute_bmi();
        self.profile = profile;
        tracing::debug!(session = %self.session_id, "Profile replaced");
    }

    // ── Vitals ─────────────────────────────────────────────

    pub fn add_vitals(&mut self, update: VitalsSnapshot) {
        let fields = update.len();
        self.vitals.merge(update);
        tracing::debug!(session = %self.session_id, fields, "Vitals merged");
    }

    // ── Medical items ──────────────────────────────────────

    /// Record an item dated today. Returns its id, or `None` for a blank name.
    pub fn add_medical_item(&mut self, category: ItemCategory, name: &str) -> Option<u64> {
        self.add_medical_item_on(category, name, Local::now().date_naive())
    }

    pub fn add_medical_item_on(
        &mut self,
        category: ItemCategory,
        name: &str,
        date_added: NaiveDate,
    ) -> Option<u64> {
        let id = self.next_item_id;
        let added = self.records.add(category, name, id, date_added)?.id;
        self.next_item_id += 1;
        tracing::debug!(
            session = %self.session_id,
            category = category.as_str(),
            id,
            "Medical item added"
        );
        Some(added)
    }

    pub fn remove_medical_item(&mut self, category: ItemCategory, id: u64) -> bool {
        let removed = self.records.remove(category, id);
        tracing::debug!(
            session = %self.session_id,
            category = category.as_str(),
            id,
            removed,
            "Medical item removal"
        );
        removed
    }

    pub fn medical_items(&self, category: ItemCategory) -> &[MedicalItem] {
        self.records.list(category)
    }

    // ── Insights & consultation ────────────────────────────

    /// Current insights, recomputed from scratch.
    pub fn insights(&self) -> HealthInsights {
        compute_insights(&self.profile, &self.vitals, &self.records)
    }

    pub fn set_query_draft(&mut self, text: &str) {
        self.query_draft = text.to_string();
    }

    /// Answer the current draft. A blank draft changes nothing. Otherwise
    /// the record goes to the front of the history and the draft is cleared.
    pub fn submit_query(&mut self) -> Option<&ConsultationRecord> {
        let draft = std::mem::take(&mut self.query_draft);
        let Some(record) = self.answer(&draft) else {
            self.query_draft = draft;
            return None;
        };
        Some(self.history.record(record))
    }

    /// Answer `query` directly, leaving the draft alone.
    pub fn ask(&mut self, query: &str) -> Option<&ConsultationRecord> {
        let record = self.answer(query)?;
        Some(self.history.record(record))
    }

    fn answer(&self, query: &str) -> Option<ConsultationRecord> {
        let insights = self.insights();
        let ctx = ConsultationContext {
            insights: &insights,
            profile: &self.profile,
            vitals: &self.vitals,
            records: &self.records,
        };
        let record = generate_consultation(query, &ctx)?;
        tracing::debug!(
            session = %self.session_id,
            topic = ?record.topic(),
            history = self.history.len() + 1,
            "Consultation recorded"
        );
        Some(record)
    }

    // ── Snapshots ──────────────────────────────────────────

    /// Build a session by replaying a snapshot: profile fields, then vitals
    /// readings in order, then items, then queued questions.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Result<Self, SnapshotError> {
        let mut state = Self::new();

        for (key, value) in &snapshot.profile {
            let field: ProfileField = key.parse()?;
            state.update_profile_field(field, &value_text(key, value)?)?;
        }

        for reading in &snapshot.vitals {
            let pairs = reading
                .iter()
                .map(|(key, value)| Ok((key.as_str(), value_text(key, value)?)))
                .collect::<Result<Vec<_>, SnapshotError>>()?;
            let update =
                VitalsSnapshot::from_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())))?;
            state.add_vitals(update);
        }

        check_records(&snapshot.records)?;
        state.next_item_id = snapshot.records.max_id().map_or(1, |id| id + 1);
        state.records = snapshot.records;

        for question in &snapshot.questions {
            state.ask(question);
        }

        tracing::debug!(
            session = %state.session_id,
            consultations = state.history.len(),
            "Session restored from snapshot"
        );
        Ok(state)
    }
}

// ═══════════════════════════════════════════════════════════
// SessionSnapshot
// ═══════════════════════════════════════════════════════════

/// JSON form of what a collaborator hands the engine.
///
/// Profile and vitals are keyed by their wire names (`age`, `systolicBP`,
/// ...). Values may be strings or numbers. `vitals` is a list of readings
/// merged in order, so later readings overwrite earlier ones key by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionSnapshot {
    pub profile: BTreeMap<String, serde_json::Value>,
    pub vitals: Vec<BTreeMap<String, serde_json::Value>>,
    pub records: MedicalRecords,
    pub questions: Vec<String>,
}

impl SessionSnapshot {
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Ids must be unique across every list, and each item must sit in the
/// list its category names.
fn check_records(records: &MedicalRecords) -> Result<(), SnapshotError> {
    let mut seen = HashSet::new();
    for list in ItemCategory::ALL {
        for item in records.list(list) {
            if item.category != list {
                return Err(SnapshotError::MisfiledItem {
                    id: item.id,
                    category: item.category,
                    list,
                });
            }
            if !seen.insert(item.id) {
                return Err(SnapshotError::DuplicateItemId(item.id));
            }
        }
    }
    Ok(())
}

fn value_text(key: &str, value: &serde_json::Value) -> Result<String, SnapshotError> {
    match value {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(SnapshotError::UnsupportedValue(key.to_string())),
    }
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid snapshot record: {0}")]
    Model(#[from] ModelError),
    #[error("Unsupported value for {0}: expected string, number or null")]
    UnsupportedValue(String),
    #[error("Duplicate medical item id {0}")]
    DuplicateItemId(u64),
    #[error("Medical item {id} is tagged {category} but listed under {list}")]
    MisfiledItem {
        id: u64,
        category: ItemCategory,
        list: ItemCategory,
    },
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::consultation::ConsultationTopic;
    use crate::intelligence::RiskLevel;
    use crate::models::{Gender, VitalField};

    fn make_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 12).unwrap()
    }

    fn make_state() -> SessionState {
        let mut state = SessionState::new();
        state.update_profile_field(ProfileField::Age, "50").unwrap();
        state.update_profile_field(ProfileField::Gender, "male").unwrap();
        state.add_vitals(VitalsSnapshot::new().with(VitalField::SystolicBp, "145"));
        state
    }

    #[test]
    fn profile_updates_recompute_bmi() {
        let mut state = SessionState::new();
        state.update_profile_field(ProfileField::Height, "180").unwrap();
        assert_eq!(state.profile().bmi, "");
        state.update_profile_field(ProfileField::Weight, "81").unwrap();
        assert_eq!(state.profile().bmi, "25.0");
    }

    #[test]
    fn invalid_enum_is_rejected_and_profile_kept() {
        let mut state = make_state();
        let err = state
            .update_profile_field(ProfileField::Gender, "robot")
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidEnum { .. }));
        assert_eq!(state.profile().gender, Some(Gender::Male));
    }

    #[test]
    fn set_profile_derives_bmi() {
        let mut state = SessionState::new();
        state.set_profile(Profile {
            height: "170".into(),
            weight: "95".into(),
            ..Profile::default()
        });
        assert_eq!(state.profile().bmi, "32.9");
    }

    #[test]
    fn vitals_merge_by_key() {
        let mut state = make_state();
        state.add_vitals(
            VitalsSnapshot::new()
                .with(VitalField::DiastolicBp, "90")
                .with(VitalField::SystolicBp, "150"),
        );
        assert_eq!(state.vitals().raw(VitalField::SystolicBp), "150");
        assert_eq!(state.vitals().raw(VitalField::DiastolicBp), "90");
    }

    #[test]
    fn item_ids_are_unique_and_ordered() {
        let mut state = SessionState::new();
        let a = state.add_medical_item_on(ItemCategory::Condition, "Asthma", make_day());
        let blank = state.add_medical_item_on(ItemCategory::Condition, "   ", make_day());
        let b = state.add_medical_item_on(ItemCategory::Symptom, "headache", make_day());
        assert_eq!(a, Some(1));
        assert_eq!(blank, None);
        assert_eq!(b, Some(2));

        assert!(state.remove_medical_item(ItemCategory::Condition, 1));
        assert!(!state.remove_medical_item(ItemCategory::Condition, 1));
        let c = state.add_medical_item(ItemCategory::Medication, "Metformin");
        assert_eq!(c, Some(3));
        assert_eq!(state.medical_items(ItemCategory::Medication).len(), 1);
    }

    #[test]
    fn insights_follow_state() {
        let mut state = make_state();
        assert_eq!(
            state.insights().cardiovascular_risk.unwrap().risk_level,
            RiskLevel::Moderate
        );
        state.add_medical_item_on(ItemCategory::Symptom, "chest pain", make_day());
        assert_eq!(
            state.insights().overall_assessment,
            "Symptoms requiring urgent evaluation"
        );
    }

    #[test]
    fn submit_query_prepends_and_clears_draft() {
        let mut state = make_state();
        state.set_query_draft("what does my blood pressure mean");
        let record = state.submit_query().unwrap();
        assert!(record.clinical_analysis().contains("Stage 2 hypertension"));
        assert_eq!(state.query_draft(), "");

        state.set_query_draft("is my heart ok");
        state.submit_query();
        assert_eq!(state.history().len(), 2);
        assert_eq!(
            state.history().latest().unwrap().topic(),
            ConsultationTopic::Cardiac
        );
    }

    #[test]
    fn blank_draft_leaves_history_unchanged() {
        let mut state = make_state();
        state.ask("blood pressure");
        let before = state.history().clone();

        state.set_query_draft("   ");
        assert!(state.submit_query().is_none());
        assert_eq!(state.history(), &before);
        assert_eq!(state.query_draft(), "   ");
        assert!(state.ask("").is_none());
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn snapshot_replays_into_state() {
        let json = r#"{
            "profile": { "age": 70, "gender": "male", "smokingHistory": "current",
                         "height": "175", "weight": "80" },
            "vitals": [
                { "systolicBP": "130", "totalCholesterol": 250 },
                { "systolicBP": 150, "hdlCholesterol": "35" }
            ],
            "records": {
                "conditions": [
                    { "id": 7, "name": "Asthma", "dateAdded": "2026-01-05", "category": "conditions" }
                ]
            },
            "questions": ["What does my blood pressure mean?", "  "]
        }"#;
        let snapshot: SessionSnapshot = serde_json::from_str(json).unwrap();
        let mut state = SessionState::from_snapshot(snapshot).unwrap();

        assert_eq!(state.profile().bmi, "26.1");
        assert_eq!(state.vitals().raw(VitalField::SystolicBp), "150");
        assert_eq!(state.vitals().raw(VitalField::TotalCholesterol), "250");
        let risk = state.insights().cardiovascular_risk.unwrap();
        assert_eq!(risk.risk_score, 10);
        assert_eq!(state.history().len(), 1);

        assert_eq!(state.add_medical_item(ItemCategory::Symptom, "cough"), Some(8));
    }

    #[test]
    fn snapshot_rejects_unknown_fields_and_values() {
        let unknown: SessionSnapshot =
            serde_json::from_str(r#"{ "vitals": [ { "pulseOx": "97" } ] }"#).unwrap();
        assert!(matches!(
            SessionState::from_snapshot(unknown),
            Err(SnapshotError::Model(ModelError::InvalidEnum { .. }))
        ));

        let nested: SessionSnapshot =
            serde_json::from_str(r#"{ "profile": { "age": [50] } }"#).unwrap();
        assert!(matches!(
            SessionState::from_snapshot(nested),
            Err(SnapshotError::UnsupportedValue(key)) if key == "age"
        ));
    }

    #[test]
    fn snapshot_rejects_duplicate_item_ids() {
        let json = r#"{ "records": {
            "conditions": [
                { "id": 3, "name": "Asthma", "dateAdded": "2026-01-05", "category": "conditions" }
            ],
            "medications": [
                { "id": 3, "name": "Inhaler", "dateAdded": "2026-01-05", "category": "medications" }
            ]
        } }"#;
        let snapshot: SessionSnapshot = serde_json::from_str(json).unwrap();
        assert!(matches!(
            SessionState::from_snapshot(snapshot),
            Err(SnapshotError::DuplicateItemId(3))
        ));
    }

    #[test]
    fn snapshot_rejects_misfiled_items() {
        let json = r#"{ "records": {
            "conditions": [
                { "id": 3, "name": "Asthma", "dateAdded": "2026-01-05", "category": "conditions" },
                { "id": 4, "name": "cough", "dateAdded": "2026-01-05", "category": "symptoms" }
            ]
        } }"#;
        let snapshot: SessionSnapshot = serde_json::from_str(json).unwrap();
        match SessionState::from_snapshot(snapshot) {
            Err(SnapshotError::MisfiledItem { id, category, list }) => {
                assert_eq!(id, 4);
                assert_eq!(category, ItemCategory::Symptom);
                assert_eq!(list, ItemCategory::Condition);
            }
            other => panic!("expected misfiled item error, got {other:?}"),
        }
    }

    #[test]
    fn restored_items_remove_one_at_a_time() {
        let json = r#"{ "records": {
            "conditions": [
                { "id": 3, "name": "Asthma", "dateAdded": "2026-01-05", "category": "conditions" },
                { "id": 5, "name": "Migraine", "dateAdded": "2026-01-06", "category": "conditions" }
            ]
        } }"#;
        let snapshot: SessionSnapshot = serde_json::from_str(json).unwrap();
        let mut state = SessionState::from_snapshot(snapshot).unwrap();
        assert!(state.remove_medical_item(ItemCategory::Condition, 3));
        assert_eq!(state.medical_items(ItemCategory::Condition).len(), 1);
    }

    #[test]
    fn load_reads_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "profile": {{ "age": "45" }}, "questions": ["diabetes?"] }}"#).unwrap();

        let snapshot = SessionSnapshot::load(file.path()).unwrap();
        assert_eq!(snapshot.questions, vec!["diabetes?"]);
        let state = SessionState::from_snapshot(snapshot).unwrap();
        assert_eq!(
            state.history().latest().unwrap().topic(),
            ConsultationTopic::Diabetes
        );
    }

    #[test]
    fn load_reports_io_and_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(SessionSnapshot::load(&missing), Err(SnapshotError::Io(_))));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert!(matches!(SessionSnapshot::load(&bad), Err(SnapshotError::Parse(_))));
    }
}
