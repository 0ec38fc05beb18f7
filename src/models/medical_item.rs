use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{ItemCategory, SymptomFrequency, SymptomSeverity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalItem {
    pub id: u64,
    pub name: String,
    pub date_added: NaiveDate,
    pub category: ItemCategory,
    /// Symptoms only. Recorded for display, not read by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<SymptomSeverity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<SymptomFrequency>,
}

/// Conditions, medications, allergies, surgeries and symptoms, each kept
/// in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalRecords {
    pub conditions: Vec<MedicalItem>,
    pub medications: Vec<MedicalItem>,
    pub allergies: Vec<MedicalItem>,
    pub surgeries: Vec<MedicalItem>,
    pub symptoms: Vec<MedicalItem>,
}

impl MedicalRecords {
    pub fn list(&self, category: ItemCategory) -> &[MedicalItem] {
        match category {
            ItemCategory::Condition => &self.conditions,
            ItemCategory::Medication => &self.medications,
            ItemCategory::Allergy => &self.allergies,
            ItemCategory::Surgery => &self.surgeries,
            ItemCategory::Symptom => &self.symptoms,
        }
    }

    fn list_mut(&mut self, category: ItemCategory) -> &mut Vec<MedicalItem> {
        match category {
            ItemCategory::Condition => &mut self.conditions,
            ItemCategory::Medication => &mut self.medications,
            ItemCategory::Allergy => &mut self.allergies,
            ItemCategory::Surgery => &mut self.surgeries,
            ItemCategory::Symptom => &mut self.symptoms,
        }
    }

    /// Append a new item. Blank names are ignored.
    pub fn add(
        &mut self,
        category: ItemCategory,
        name: &str,
        id: u64,
        date_added: NaiveDate,
    ) -> Option<&MedicalItem> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let is_symptom = category == ItemCategory::Symptom;
        let list = self.list_mut(category);
        list.push(MedicalItem {
            id,
            name: name.to_string(),
            date_added,
            category,
            severity: is_symptom.then_some(SymptomSeverity::Moderate),
            frequency: is_symptom.then_some(SymptomFrequency::Occasional),
        });
        list.last()
    }

    /// Remove by id. Returns whether anything was removed.
    pub fn remove(&mut self, category: ItemCategory, id: u64) -> bool {
        let list = self.list_mut(category);
        let before = list.len();
        list.retain(|item| item.id != id);
        list.len() != before
    }

    /// Symptom descriptions in recorded order.
    pub fn symptom_descriptions(&self) -> Vec<&str> {
        self.symptoms.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn condition_names(&self) -> Vec<&str> {
        self.conditions.iter().map(|c| c.name.as_str()).collect()
    }

    /// Largest id in use, for resuming an id counter.
    pub fn max_id(&self) -> Option<u64> {
        [
            &self.conditions,
            &self.medications,
            &self.allergies,
            &self.surgeries,
            &self.symptoms,
        ]
        .into_iter()
        .flatten()
        .map(|item| item.id)
        .max()
    }
}
