use thiserror::Error;

/// Triage error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriageError {
    #[error("Missing required field: patient_description")]
    MissingDescription,
}
