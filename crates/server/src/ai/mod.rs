//! Symptom triage powered by the Gemini API

pub mod client;
pub mod triage;

pub use client::{GeminiClient, LlmError};
