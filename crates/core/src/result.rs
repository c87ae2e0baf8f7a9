use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Structured triage answer.
///
/// Every field is always serialized; a section the model did not answer is
/// an empty string, never a missing key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriageResult {
    pub common_causes: String,
    pub immediate_response: String,
    pub further_tests: String,
    pub seek_medical_attention: String,
    pub prevention_tips: String,
    pub needed_clinician: String,
}

impl TriageResult {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::CommonCauses => &self.common_causes,
            Section::ImmediateResponse => &self.immediate_response,
            Section::FurtherTests => &self.further_tests,
            Section::SeekMedicalAttention => &self.seek_medical_attention,
            Section::PreventionTips => &self.prevention_tips,
            Section::NeededClinician => &self.needed_clinician,
        }
    }

    fn slot_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::CommonCauses => &mut self.common_causes,
            Section::ImmediateResponse => &mut self.immediate_response,
            Section::FurtherTests => &mut self.further_tests,
            Section::SeekMedicalAttention => &mut self.seek_medical_attention,
            Section::PreventionTips => &mut self.prevention_tips,
            Section::NeededClinician => &mut self.needed_clinician,
        }
    }

    /// Replace the value of a section, discarding any earlier one
    pub fn set(&mut self, section: Section, value: String) {
        *self.slot_mut(section) = value;
    }

    /// Apply `f` to every non-empty section
    pub(crate) fn map_filled(&mut self, f: impl Fn(&str) -> String) {
        for section in Section::ALL {
            let slot = self.slot_mut(section);
            if !slot.is_empty() {
                *slot = f(slot);
            }
        }
    }

    /// True when no section was extracted
    pub fn is_empty(&self) -> bool {
        self.filled_sections() == 0
    }

    /// Number of sections with a non-empty value
    pub fn filled_sections(&self) -> usize {
        Section::ALL
            .iter()
            .filter(|s| !self.get(**s).is_empty())
            .count()
    }
}
