//! Generative client trait and conversation types

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Conversation role
///
/// The gateway translates `Assistant` to whatever label the model API uses
/// for model-authored turns; nothing above the gateway sees provider labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One role-tagged message in a conversation.
///
/// Order is semantically significant: the full history is replayed verbatim
/// to the model on every request. Role alternation is not enforced; the
/// caller supplies turns in presentation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One opaque unit of text delivered by the streaming model API.
pub type Fragment = String;

/// Lazy fragment sequence. May yield an error item mid-sequence; the
/// stream ends after the first error.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<Fragment>> + Send>>;

/// Generation request: a system instruction plus the conversation so far.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub system_instruction: String,
    pub turns: Vec<Turn>,
}

impl GenerateRequest {
    /// Create a request from a system instruction and conversation turns
    pub fn new(system_instruction: impl Into<String>, turns: Vec<Turn>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            turns,
        }
    }

    /// Create a single-shot request carrying one user turn
    pub fn single(system_instruction: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(system_instruction, vec![Turn::user(content)])
    }
}

/// Generative client trait
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Get provider name
    fn provider(&self) -> &str;

    /// Get model name
    fn model(&self) -> &str;

    /// Open a fragment stream for one request.
    ///
    /// A failure up to and including the upstream response check is returned
    /// as `Err` before any fragment exists; failures after that surface as
    /// an `Err` item inside the stream.
    async fn generate_stream(&self, request: GenerateRequest) -> Result<FragmentStream>;
}
