use std::sync::Arc;

use crate::llm_client::CompletionService;

/// Shared application state injected into route handlers via Axum extractors.
/// Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `OpenAiClient` in production, stubs in tests.
    pub llm: Arc<dyn CompletionService>,
}
