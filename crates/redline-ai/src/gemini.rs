//! Google Gemini generative model provider
//!
//! Talks to the `streamGenerateContent` endpoint with `alt=sse`. Gemini
//! differences from the internal model: roles are `user` and `model` (not
//! `assistant`), the system instruction is a top-level field, and the API
//! key travels as a query parameter.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::client::{FragmentStream, GenerateRequest, GenerativeClient, Role};
use crate::error::{GatewayError, Result};
use crate::http_client::build_http_client;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Gemini client
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: build_http_client(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the model to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Serialize)]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
}

#[derive(Serialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

// Streaming response types. Each SSE `data:` line carries a full
// generateContent response; fragment text lives at
// `candidates[0].content.parts[].text`.

#[derive(Deserialize)]
struct GeminiStreamChunk {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    error: Option<GeminiErrorPayload>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiCandidateContent>,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Deserialize)]
struct GeminiCandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiErrorPayload {
    message: String,
}

fn build_body(request: &GenerateRequest) -> GeminiRequest {
    let system_instruction = if request.system_instruction.is_empty() {
        None
    } else {
        Some(GeminiContent {
            role: None,
            parts: vec![GeminiPart {
                text: request.system_instruction.clone(),
            }],
        })
    };

    let contents = request
        .turns
        .iter()
        .map(|turn| {
            let role = match turn.role {
                Role::User => "user",
                Role::Assistant => "model",
            };
            GeminiContent {
                role: Some(role.to_string()),
                parts: vec![GeminiPart {
                    text: turn.content.clone(),
                }],
            }
        })
        .collect();

    GeminiRequest {
        system_instruction,
        contents,
    }
}

fn fragment_text(chunk: GeminiStreamChunk) -> Option<String> {
    let candidate = chunk.candidates.into_iter().next()?;
    let parts = candidate.content?.parts;
    let text: String = parts.into_iter().filter_map(|p| p.text).collect();
    if text.is_empty() { None } else { Some(text) }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    fn provider(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate_stream(&self, request: GenerateRequest) -> Result<FragmentStream> {
        let body = build_body(&request);
        let url = format!(
            "{}/models/{}:streamGenerateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("alt", "sse"), ("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(GatewayError::Model(format!("Gemini API error: {}", error)));
        }

        tracing::debug!(model = %self.model, "gemini stream opened");

        let mut byte_stream = response.bytes_stream();

        Ok(Box::pin(async_stream::stream! {
            // Buffer raw bytes and only decode complete lines, so a
            // multi-byte character split across network chunks stays intact.
            let mut buffer: Vec<u8> = Vec::new();

            while let Some(chunk_result) = byte_stream.next().await {
                let chunk = match chunk_result {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        yield Err(GatewayError::Stream(format!("Stream error: {}", e)));
                        return;
                    }
                };

                buffer.extend_from_slice(&chunk);

                // Gemini terminates SSE lines with CRLF; split on LF and
                // trim the CR so both conventions parse.
                while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
                    let line_bytes: Vec<u8> = buffer.drain(..=pos).collect();
                    let line = String::from_utf8_lossy(&line_bytes);
                    let line = line.trim_end_matches(['\n', '\r']);

                    let Some(data) = line.strip_prefix("data:") else {
                        continue;
                    };
                    let data = data.trim_start();
                    if data.is_empty() {
                        continue;
                    }

                    let payload: GeminiStreamChunk = match serde_json::from_str(data) {
                        Ok(p) => p,
                        Err(_) => continue,
                    };

                    if let Some(error) = payload.error {
                        yield Err(GatewayError::Stream(error.message));
                        return;
                    }

                    if let Some(text) = fragment_text(payload) {
                        yield Ok(text);
                    }
                }
            }
        }))
    }
}
