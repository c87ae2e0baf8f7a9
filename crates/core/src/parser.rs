//! Completion parser: freeform model reply to `TriageResult`
//!
//! The reply is split into paragraphs on a delimiter (a blank line by
//! default). Each paragraph is tested against the section titles in
//! `Section::ALL` order by plain substring containment, and the first title
//! found claims the paragraph. The value stored is the paragraph with every
//! `"<title>:"` occurrence removed and asterisks stripped. A later paragraph
//! for the same section replaces an earlier one.
//!
//! Matching is not anchored: a title quoted inside unrelated prose still
//! claims that paragraph, and a title without a trailing colon leaves the
//! whole paragraph (title included) as the value.

use std::sync::LazyLock;

use regex::Regex;

use crate::result::TriageResult;
use crate::section::Section;

/// Paragraph separator used when none is configured
pub const DEFAULT_DELIMITER: &str = "\n\n";

static ASTERISK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*+").expect("valid asterisk pattern"));

/// Match rules, highest priority first
const RULES: [Section; 6] = Section::ALL;

/// Splits and labels a raw completion
#[derive(Debug, Clone)]
pub struct CompletionParser {
    delimiter: String,
}

impl Default for CompletionParser {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl CompletionParser {
    /// Parser splitting on a custom delimiter. An empty delimiter falls back
    /// to `DEFAULT_DELIMITER`.
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Self::default();
        }
        Self { delimiter }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Parse a raw completion. Never fails; unrecognized text yields empty
    /// sections.
    pub fn parse(&self, raw: &str) -> TriageResult {
        let mut result = TriageResult::default();

        for paragraph in raw.split(self.delimiter.as_str()) {
            if let Some((section, content)) = scan(paragraph) {
                result.set(section, content);
            }
        }

        result.map_filled(strip_asterisks);
        result
    }
}

/// Label one paragraph with the first matching rule
fn scan(paragraph: &str) -> Option<(Section, String)> {
    let section = RULES
        .into_iter()
        .find(|section| paragraph.contains(section.title()))?;

    let label = format!("{}:", section.title());
    let content = paragraph.replace(&label, "");
    let content = ASTERISK_RUN.replace_all(content.trim(), "");

    Some((section, content.trim().to_string()))
}

/// Remove every asterisk from `text`
pub fn strip_asterisks(text: &str) -> String {
    ASTERISK_RUN.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> TriageResult {
        CompletionParser::default().parse(raw)
    }

    #[test]
    fn well_formed_completion() {
        let raw = "Common Causes: Likely a viral infection.\n\n\
                   Immediate Response: Rest and fluids.\n\n\
                   Further Medical Tests: Complete blood count.\n\n\
                   When to Seek Immediate Medical Attention: Breathing difficulty.\n\n\
                   Prevention Tips: Wash hands regularly.\n\n\
                   Needed Clinician: General Practitioner (GP)";

        let result = parse(raw);

        assert_eq!(result.common_causes, "Likely a viral infection.");
        assert_eq!(result.immediate_response, "Rest and fluids.");
        assert_eq!(result.further_tests, "Complete blood count.");
        assert_eq!(result.seek_medical_attention, "Breathing difficulty.");
        assert_eq!(result.prevention_tips, "Wash hands regularly.");
        assert_eq!(result.needed_clinician, "General Practitioner (GP)");
    }

    #[test]
    fn no_titles_yields_empty_result() {
        assert_eq!(parse("I cannot help with that."), TriageResult::default());
        assert_eq!(parse(""), TriageResult::default());
    }

    #[test]
    fn strips_asterisk_runs() {
        let result = parse("Prevention Tips: **Wash hands** regularly.");
        assert_eq!(result.prevention_tips, "Wash hands regularly.");
    }

    #[test]
    fn strips_markdown_heading_markup() {
        let result = parse("**Common Causes:** Tension headache.\n\n**Needed Clinician:** Neurologist");
        assert_eq!(result.common_causes, "Tension headache.");
        assert_eq!(result.needed_clinician, "Neurologist");
    }

    #[test]
    fn later_paragraph_overwrites() {
        let raw = "Needed Clinician: Cardiologist\n\nNeeded Clinician: Pulmonologist";
        assert_eq!(parse(raw).needed_clinician, "Pulmonologist");
    }

    #[test]
    fn first_rule_claims_paragraph() {
        let raw = "Prevention Tips: avoid triggers. See Common Causes above.";
        let result = parse(raw);

        assert_eq!(result.common_causes, "Prevention Tips: avoid triggers. See Common Causes above.");
        assert_eq!(result.prevention_tips, "");
    }

    #[test]
    fn title_inside_prose_still_matches() {
        let raw = "As for Immediate Response measures, rest is advised.";
        assert_eq!(
            parse(raw).immediate_response,
            "As for Immediate Response measures, rest is advised."
        );
    }

    #[test]
    fn title_without_colon_keeps_paragraph() {
        let raw = "Needed Clinician - Dermatologist";
        assert_eq!(parse(raw).needed_clinician, "Needed Clinician - Dermatologist");
    }

    #[test]
    fn numbered_labels_keep_number() {
        let raw = "1. Common Causes: Migraine.";
        assert_eq!(parse(raw).common_causes, "1.  Migraine.");
    }

    #[test]
    fn single_newlines_do_not_split() {
        let raw = "Common Causes: Migraine.\nImmediate Response: Dark room.";
        let result = parse(raw);

        assert_eq!(result.common_causes, "Migraine.\nImmediate Response: Dark room.");
        assert_eq!(result.immediate_response, "");
    }

    #[test]
    fn custom_delimiter() {
        let parser = CompletionParser::with_delimiter("\n");
        let result = parser.parse("Common Causes: Migraine.\nImmediate Response: Dark room.");

        assert_eq!(result.common_causes, "Migraine.");
        assert_eq!(result.immediate_response, "Dark room.");
    }

    #[test]
    fn empty_delimiter_falls_back() {
        assert_eq!(CompletionParser::with_delimiter("").delimiter(), DEFAULT_DELIMITER);
    }

    #[test]
    fn all_values_free_of_asterisks() {
        let raw = "Common Causes: * lone star\n\nPrevention Tips: a*b**c***";
        let result = parse(raw);

        for section in Section::ALL {
            assert!(!result.get(section).contains('*'));
        }
        assert_eq!(result.common_causes, "lone star");
        assert_eq!(result.prevention_tips, "abc");
    }

    #[test]
    fn strip_asterisks_is_idempotent() {
        let once = strip_asterisks("**bold** and *italic*");
        assert_eq!(once, "bold and italic");
        assert_eq!(strip_asterisks(&once), once);
    }
}
