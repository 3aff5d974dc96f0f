use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::evaluation::evaluator::EvaluationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is a server error carrying a single message:
/// `{"detail": "<message>"}` with status 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidRequest(msg) => tracing::error!("Invalid request: {msg}"),
            AppError::Evaluation(EvaluationError::InvalidJson(e)) => {
                tracing::error!("Model output rejected: {e}")
            }
            AppError::Evaluation(EvaluationError::Completion(e)) => {
                tracing::error!("LLM error: {e}")
            }
        }

        let body = Json(json!({ "detail": self.to_string() }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// JSON body extractor whose rejections become `AppError`s, so malformed
/// bodies get the same error envelope as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_json_renders_fixed_message() {
        let parse_err = serde_json::from_str::<Value>("nope").unwrap_err();
        let (status, body) = render(EvaluationError::InvalidJson(parse_err).into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "detail": "Response from OpenAI is not valid JSON" }));
    }

    #[tokio::test]
    async fn test_llm_error_renders_its_own_text() {
        let err = AppError::from(EvaluationError::from(LlmError::EmptyContent));
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "LLM returned empty content");
    }

    #[tokio::test]
    async fn test_invalid_request_is_server_error() {
        let (status, body) = render(AppError::InvalidRequest("bad body".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "bad body");
    }
}
