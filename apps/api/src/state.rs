use std::sync::Arc;

use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds nothing request-specific; each generation is independent.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production, swapped for a scripted client in tests.
    pub llm: Arc<dyn CompletionClient>,
}
