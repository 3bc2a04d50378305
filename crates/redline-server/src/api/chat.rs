use axum::Json;
use axum::extract::State;
use axum::response::Response;
use redline_ai::{GenerateRequest, Turn};
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::relay::relay_response;
use crate::api::state::AppState;
use crate::prompts::CHAT_SYSTEM_PROMPT;

// POST /chat
//
// The client owns the conversation and resends the full history on every
// call; the relay holds no session state between exchanges.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let messages = body
        .get("messages")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::bad_request("Invalid request: messages array is required"))?;

    let turns: Vec<Turn> = serde_json::from_value(Value::Array(messages.clone()))
        .map_err(|_| ApiError::bad_request("Invalid request: malformed message in messages"))?;

    let client = state.gateway.resolve()?;

    let request = GenerateRequest::new(CHAT_SYSTEM_PROMPT.as_str(), turns);

    tracing::debug!(
        provider = client.provider(),
        model = client.model(),
        turns = request.turns.len(),
        "streaming chat answer"
    );

    let fragments = client.generate_stream(request).await?;
    Ok(relay_response(fragments))
}
