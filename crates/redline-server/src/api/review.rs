use axum::Json;
use axum::extract::State;
use axum::response::Response;
use redline_ai::GenerateRequest;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::relay::relay_response;
use crate::api::state::AppState;
use crate::prompts::REVIEW_SYSTEM_PROMPT;

// POST /review
//
// Validates shape on the raw JSON value so a missing or mistyped `text`
// field is rejected with a 400 before any gateway call.
pub async fn review_document(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let text = body
        .get("text")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::bad_request("Invalid request: text is required"))?;

    let client = state.gateway.resolve()?;

    let request = GenerateRequest::single(
        REVIEW_SYSTEM_PROMPT,
        format!("Please review the following document:\n\n{}", text),
    );

    tracing::debug!(
        provider = client.provider(),
        model = client.model(),
        bytes = text.len(),
        "streaming document review"
    );

    let fragments = client.generate_stream(request).await?;
    Ok(relay_response(fragments))
}
