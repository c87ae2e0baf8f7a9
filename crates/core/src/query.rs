use crate::error::TriageError;

/// A patient's free-text description of their symptoms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomQuery {
    description: String,
}

impl SymptomQuery {
    /// Validate a description. Blank text is rejected.
    pub fn new(description: impl Into<String>) -> Result<Self, TriageError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(TriageError::MissingDescription);
        }
        Ok(Self { description })
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
