// Résumé summary evaluation: prompt construction, the completion round-trip
// and the HTTP handler. All model calls go through llm_client.

pub mod evaluator;
pub mod handlers;
pub mod prompts;
