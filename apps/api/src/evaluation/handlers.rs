//! Axum route handler for résumé evaluation.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::errors::{AppError, AppJson};
use crate::evaluation::evaluator::{evaluate_resume, ResumeRequest};
use crate::state::AppState;

/// Success envelope. `output` is the model's JSON, unmodified.
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub status: &'static str,
    pub output: Value,
}

/// POST /evaluate-resume
///
/// Scores the résumé summary and proposes rewrites via the completion service.
pub async fn handle_evaluate_resume(
    State(state): State<AppState>,
    AppJson(request): AppJson<ResumeRequest>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let output = evaluate_resume(&request, state.llm.as_ref()).await?;

    Ok(Json(EvaluationResponse {
        status: "success",
        output,
    }))
}
