//! triage-core: Symptom triage prompt and completion types
//!
//! This crate provides the pieces of the triage service that do not touch
//! the network: the section catalogue, prompt construction, and the parser
//! that turns a model's freeform reply into a `TriageResult`.

pub mod error;
pub mod parser;
pub mod prompt;
pub mod query;
pub mod result;
pub mod section;

pub use error::TriageError;
pub use parser::{CompletionParser, DEFAULT_DELIMITER, strip_asterisks};
pub use prompt::{CLINICIANS, Prompt};
pub use query::SymptomQuery;
pub use result::TriageResult;
pub use section::Section;
