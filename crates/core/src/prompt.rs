//! Prompt construction for the triage model

use crate::query::SymptomQuery;
use crate::section::Section;

/// Specialties the model may recommend in the Needed Clinician section
pub const CLINICIANS: [&str; 15] = [
    "Andrologist",
    "Cardiologist",
    "Dermatologist",
    "Gastroenterologist",
    "Pulmonologist",
    "Nephrologist",
    "Hepatologist",
    "Rheumatologist",
    "Endocrinologist",
    "Neurologist",
    "Ophthalmologist",
    "Otolaryngologist (ENT)",
    "Urologist",
    "General Practitioner (GP)",
    "Pediatrician",
];

const SYSTEM_PROMPT: &str = "You are a medical assistant that helps patients identify possible \
conditions and the appropriate medical specialist. Provide accurate and concise medical \
information, focusing on clarity and brevity. When recommending a clinician, choose only from \
the provided list.";

const FORMAT_RULES: &str = "For each category, provide only one short paragraph with no bullet \
points or asterisks. Keep each paragraph under 50 words. Label each paragraph with its category.";

/// Prompt sent to the model, split into the role framing and the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn for_query(query: &SymptomQuery) -> Self {
        let mut user = format!(
            "A patient describes their condition as follows:\n\n{}\n\n\
             For each of the following categories, provide a concise paragraph \
             (maximum 50 words each) about the patient's condition:\n\n",
            query.description()
        );

        for (n, section) in Section::ALL.iter().enumerate() {
            user.push_str(&format!(
                "{}. {}: {}\n",
                n + 1,
                section.title(),
                instruction(*section)
            ));
        }
        user.push('\n');
        user.push_str(FORMAT_RULES);

        Self {
            system: SYSTEM_PROMPT.to_string(),
            user,
        }
    }

    /// System and user text joined into the single string the model receives
    pub fn combined(&self) -> String {
        format!("{}\n\n{}", self.system, self.user)
    }
}

fn instruction(section: Section) -> String {
    match section {
        Section::CommonCauses => {
            "Summarize the most likely medical conditions responsible for these symptoms.".into()
        }
        Section::ImmediateResponse => "Briefly describe home care measures that could help.".into(),
        Section::FurtherTests => {
            "Mention any relevant diagnostic tests in a short paragraph.".into()
        }
        Section::SeekMedicalAttention => {
            "Concisely describe warning signs requiring urgent care.".into()
        }
        Section::PreventionTips => "Briefly explain how to reduce risk of similar issues.".into(),
        Section::NeededClinician => format!(
            "From this list of specialisations ({}) which one is the most appropriate to \
             treat this patient, give a single word answer for this section.",
            CLINICIANS.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> Prompt {
        Prompt::for_query(&SymptomQuery::new("Sharp chest pain when breathing in").unwrap())
    }

    #[test]
    fn includes_description() {
        assert!(prompt().user.contains("Sharp chest pain when breathing in"));
    }

    #[test]
    fn lists_sections_in_order() {
        let user = prompt().user;
        let mut last = 0;
        for (n, section) in Section::ALL.iter().enumerate() {
            let label = format!("{}. {}:", n + 1, section.title());
            let at = user.find(&label).unwrap_or_else(|| panic!("missing {label}"));
            assert!(at > last, "{label} out of order");
            last = at;
        }
    }

    #[test]
    fn lists_every_clinician() {
        let user = prompt().user;
        for clinician in CLINICIANS {
            assert!(user.contains(clinician), "missing {clinician}");
        }
    }

    #[test]
    fn combined_starts_with_system() {
        let p = prompt();
        let combined = p.combined();
        assert!(combined.starts_with("You are a medical assistant"));
        assert!(combined.ends_with("Label each paragraph with its category."));
        assert!(combined.contains("\n\nA patient describes"));
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(prompt(), prompt());
    }
}
