use serde::{Deserialize, Serialize};

/// A labelled section of the triage answer.
///
/// The declaration order is significant: it is both the order the model is
/// asked to answer in and the priority used when one paragraph mentions
/// several titles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    CommonCauses,
    ImmediateResponse,
    FurtherTests,
    SeekMedicalAttention,
    PreventionTips,
    NeededClinician,
}

impl Section {
    /// All sections in prompt and match-priority order
    pub const ALL: [Section; 6] = [
        Section::CommonCauses,
        Section::ImmediateResponse,
        Section::FurtherTests,
        Section::SeekMedicalAttention,
        Section::PreventionTips,
        Section::NeededClinician,
    ];

    /// Title used in the prompt and matched in the completion
    pub fn title(self) -> &'static str {
        match self {
            Section::CommonCauses => "Common Causes",
            Section::ImmediateResponse => "Immediate Response",
            Section::FurtherTests => "Further Medical Tests",
            Section::SeekMedicalAttention => "When to Seek Immediate Medical Attention",
            Section::PreventionTips => "Prevention Tips",
            Section::NeededClinician => "Needed Clinician",
        }
    }

    /// JSON key of the section in a `TriageResult`
    pub fn key(self) -> &'static str {
        match self {
            Section::CommonCauses => "common_causes",
            Section::ImmediateResponse => "immediate_response",
            Section::FurtherTests => "further_tests",
            Section::SeekMedicalAttention => "seek_medical_attention",
            Section::PreventionTips => "prevention_tips",
            Section::NeededClinician => "needed_clinician",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
