//! Axum route handlers for the Posts API.

use axum::{extract::State, response::Html, Json};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::generation::generator::generate_posts;
use crate::generation::options::{Purpose, Tone};
use crate::models::post::{GenerationRequest, GenerationResult};
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub tones: Vec<&'static str>,
    pub purposes: Vec<&'static str>,
}

/// GET /
///
/// Serves the single-page form. All state lives in the page; the server keeps none.
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/v1/posts/options
pub async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        tones: Tone::ALL.iter().map(|t| t.label()).collect(),
        purposes: Purpose::ALL.iter().map(|p| p.label()).collect(),
    })
}

/// POST /api/v1/posts/generate
///
/// Validates the form, then runs one generation. Upstream failures come back as a 200
/// with `error` set; only invalid input is an HTTP error.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationResult>, AppError> {
    validate_request(&request)?;

    let result = generate_posts(state.llm.as_ref(), &request).await;
    if result.is_error() {
        debug!("Returning upstream failure as a displayable result");
    }

    Ok(Json(result))
}

/// Only empty fields are rejected; whitespace counts as input, same as the form's check.
fn validate_request(request: &GenerationRequest) -> Result<(), AppError> {
    if request.api_key.is_empty() {
        return Err(AppError::Validation(
            "Please enter your OpenAI API Key!".to_string(),
        ));
    }
    if request.topic.is_empty() {
        return Err(AppError::Validation(
            "Please enter a topic for your posts!".to_string(),
        ));
    }
    Ok(())
}
