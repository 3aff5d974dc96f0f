//! Evaluator — resolves the effective summary, builds the prompt, calls the
//! completion service and parses the model's reply as JSON.
//!
//! The reply is passed through unchanged: no check against the expected
//! `extracted_summary` / `ats_score` / ... shape is made here.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::evaluation::prompts::build_prompt;
use crate::llm_client::prompts::ASSISTANT_SYSTEM;
use crate::llm_client::{CompletionService, LlmError};

/// Key looked up in the résumé when the request carries no summary.
pub const RESUME_SUMMARY_KEY: &str = "Summary";

/// Body of `POST /evaluate-resume`. `resume` has an open schema.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeRequest {
    pub resume: Map<String, Value>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub job_title: String,
}

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("Response from OpenAI is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error(transparent)]
    Completion(#[from] LlmError),
}

/// Request summary first, then `resume["Summary"]`, else empty.
///
/// Empty values (`null`, `false`, `0`, `""`, `[]`, `{}`) count as absent.
/// Any other non-string `Summary` is rendered as compact JSON.
pub fn resolve_summary(request: &ResumeRequest) -> String {
    if !request.summary.is_empty() {
        return request.summary.clone();
    }

    match request.resume.get(RESUME_SUMMARY_KEY) {
        Some(value) if is_empty_value(value) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Runs one evaluation end to end. All-or-nothing: any failure is returned
/// immediately, with no retry.
pub async fn evaluate_resume(
    request: &ResumeRequest,
    llm: &dyn CompletionService,
) -> Result<Value, EvaluationError> {
    let summary = resolve_summary(request);
    let prompt = build_prompt(&request.resume, &summary, &request.job_title);

    let content = llm.complete(ASSISTANT_SYSTEM, &prompt).await?;

    let output: Value = serde_json::from_str(&content).map_err(|e| {
        warn!("Model reply is not valid JSON ({e}); {} bytes", content.len());
        EvaluationError::InvalidJson(e)
    })?;

    info!(
        "Resume evaluated: resume_keys={}, summary_provided={}",
        request.resume.len(),
        !summary.is_empty()
    );

    Ok(output)
}
