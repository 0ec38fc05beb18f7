use serde::Serialize;

use super::types::ConsultationRecord;

/// Answered consultations for one session, most recent first.
///
/// Records can only be added. There is no removal and no mutable access,
/// and the history is dropped with the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConsultationHistory {
    records: Vec<ConsultationRecord>,
}

impl ConsultationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `record` at the front.
    pub fn record(&mut self, record: ConsultationRecord) -> &ConsultationRecord {
        self.records.insert(0, record);
        &self.records[0]
    }

    pub fn latest(&self) -> Option<&ConsultationRecord> {
        self.records.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConsultationRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[ConsultationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::consultation::types::{ConsultationTopic, RecordBody};

    fn make_record(question: &str, minute: u32) -> ConsultationRecord {
        let at = NaiveDate::from_ymd_opt(2026, 2, 2)
            .unwrap()
            .and_hms_opt(8, minute, 0)
            .unwrap();
        ConsultationRecord::new(
            question,
            ConsultationTopic::General,
            RecordBody::default(),
            "Clinical Guidelines",
            at,
        )
    }

    #[test]
    fn newest_record_comes_first() {
        let mut history = ConsultationHistory::new();
        history.record(make_record("first", 1));
        history.record(make_record("second", 2));
        history.record(make_record("third", 3));

        let questions: Vec<&str> = history.iter().map(|r| r.question()).collect();
        assert_eq!(questions, vec!["third", "second", "first"]);
        assert_eq!(history.latest().unwrap().question(), "third");
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn earlier_records_are_untouched_by_new_ones() {
        let mut history = ConsultationHistory::new();
        let first = history.record(make_record("first", 1)).clone();
        history.record(make_record("second", 2));
        assert_eq!(history.as_slice()[1], first);
    }

    #[test]
    fn new_history_is_empty() {
        let history = ConsultationHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
