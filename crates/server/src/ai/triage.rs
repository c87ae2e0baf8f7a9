//! Symptom description to structured triage answer

use triage_core::{CompletionParser, Prompt, SymptomQuery, TriageResult};

use super::client::{GeminiClient, LlmError};

/// Build the prompt, ask the model, and parse its reply
pub async fn analyze(
    client: &GeminiClient,
    parser: &CompletionParser,
    query: &SymptomQuery,
) -> Result<TriageResult, LlmError> {
    let prompt = Prompt::for_query(query);

    let raw = client.generate(&prompt.combined()).await?;
    tracing::debug!(model = client.model(), raw_len = raw.len(), "Received completion");

    let result = parser.parse(&raw);
    let filled = result.filled_sections();

    if result.is_empty() {
        tracing::warn!(raw_len = raw.len(), "No triage sections found in completion");
    } else {
        tracing::info!(filled = filled, "Parsed triage completion");
    }

    Ok(result)
}
