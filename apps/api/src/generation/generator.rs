//! Post generation: orchestrates one request end to end.
//!
//! Flow: build_prompt → CompletionClient::complete → trim → partition.
//!
//! Upstream failures are folded into the result (`error` set, posts empty) so the caller
//! always has something displayable. Nothing is retried or persisted.

use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::generation::partitioner::partition;
use crate::generation::prompts::build_prompt;
use crate::llm_client::CompletionClient;
use crate::models::post::{GenerationRequest, GenerationResult, Platform};

/// Runs the generation pipeline for a single, already-validated request.
pub async fn generate_posts(
    client: &dyn CompletionClient,
    request: &GenerationRequest,
) -> GenerationResult {
    let request_id = Uuid::new_v4();
    let span = info_span!("generate_posts", %request_id);

    async move {
        info!(
            "Generating posts: tone={}, purpose={}",
            request.tone.label(),
            request.purpose.label()
        );

        let prompt = build_prompt(&request.topic, request.tone, request.purpose);

        match client.complete(&prompt, &request.api_key).await {
            Ok(text) => {
                let result = partition(text.trim());
                for platform in Platform::ALL {
                    if result.post(platform) == platform.fallback() {
                        warn!("No {} section found in model output", platform.display_name());
                    }
                }
                info!("Posts generated ({} chars of model output)", text.len());
                result
            }
            Err(e) => {
                warn!("Post generation failed: {e}");
                GenerationResult::failed(e.to_string())
            }
        }
    }
    .instrument(span)
    .await
}
