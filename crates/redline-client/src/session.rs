//! Review and chat sessions over the relay's HTTP surface.
//!
//! Each session publishes its UI-visible state through `watch` channels:
//! the UI re-renders on every published increment, and failures surface as
//! synthesized in-band text instead of propagating into UI state.

use redline_ai::Turn;
use reqwest::StatusCode;
use tokio::sync::watch;

use crate::consumer::consume_body;
use crate::conversation::Conversation;
use crate::suggestions::split_suggestions;

/// Starter prompts surfaced before the first chat exchange.
pub const SUGGESTED_PROMPTS: [&str; 3] = [
    "What is the correct spelling of 'email'?",
    "How should I format fiscal year ranges?",
    "Should I use the Oxford comma?",
];

fn status_error(status: StatusCode) -> String {
    format!(
        "API error: {}",
        status.canonical_reason().unwrap_or(status.as_str())
    )
}

/// Single-shot document review session.
pub struct ReviewSession {
    http: reqwest::Client,
    base_url: String,
    report: watch::Sender<String>,
}

impl ReviewSession {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            report: watch::channel(String::new()).0,
        }
    }

    /// Subscribe to the growing report text.
    pub fn report(&self) -> watch::Receiver<String> {
        self.report.subscribe()
    }

    /// Submit a document for review, streaming the report as it arrives.
    ///
    /// Always resolves with the final visible text: any failure becomes a
    /// synthesized error report rather than stale partial content.
    pub async fn submit(&self, text: &str) -> String {
        self.report.send_replace(String::new());

        let final_text = match self.stream_review(text).await {
            Ok(report) => report,
            Err(message) => {
                tracing::warn!(error = %message, "review stream failed");
                format!("# Error\n\nFailed to process document: {}", message)
            }
        };

        self.report.send_replace(final_text.clone());
        final_text
    }

    async fn stream_review(&self, text: &str) -> Result<String, String> {
        let response = self
            .http
            .post(format!("{}/review", self.base_url))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .map_err(|err| err.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        consume_body(response.bytes_stream(), |accumulated| {
            self.report.send_replace(accumulated.to_string());
        })
        .await
        .map_err(|aborted| aborted.reason)
    }
}

/// Multi-turn Q&A session.
///
/// Owns the conversation history and resends it in full on every call;
/// follow-up suggestions are published on a side channel once a stream
/// completes normally.
pub struct ChatSession {
    http: reqwest::Client,
    base_url: String,
    conversation: watch::Sender<Conversation>,
    suggestions: watch::Sender<Vec<String>>,
}

impl ChatSession {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            conversation: watch::channel(Conversation::new()).0,
            suggestions: watch::channel(Vec::new()).0,
        }
    }

    /// Subscribe to the conversation list.
    pub fn conversation(&self) -> watch::Receiver<Conversation> {
        self.conversation.subscribe()
    }

    /// Subscribe to the follow-up suggestions for the latest answer.
    pub fn suggestions(&self) -> watch::Receiver<Vec<String>> {
        self.suggestions.subscribe()
    }

    /// Send the next user message and stream the assistant answer into a
    /// single conversation slot.
    ///
    /// Resolves with the final visible assistant text; failures synthesize
    /// an `Error: ...` turn instead of propagating.
    pub async fn send(&self, message: &str) -> String {
        if message.trim().is_empty() {
            return String::new();
        }

        self.suggestions.send_replace(Vec::new());
        self.conversation
            .send_modify(|conversation| conversation.push_user(message));

        let history: Vec<Turn> = self.conversation.borrow().turns().to_vec();

        match self.stream_answer(&history).await {
            Ok(answer) => {
                // Post-processing runs exactly once, after completion; the
                // marker could arrive split across chunks mid-stream.
                let (display, suggestions) = split_suggestions(&answer);
                if display != answer {
                    self.conversation
                        .send_modify(|conversation| conversation.apply_assistant_text(&display));
                }
                self.conversation
                    .send_modify(|conversation| conversation.finish_exchange());
                self.suggestions.send_replace(suggestions);
                display
            }
            Err(message) => {
                tracing::warn!(error = %message, "chat stream failed");
                let visible = format!("Error: {}", message);
                self.conversation
                    .send_modify(|conversation| conversation.push_assistant(&visible));
                visible
            }
        }
    }

    async fn stream_answer(&self, history: &[Turn]) -> Result<String, String> {
        let response = self
            .http
            .post(format!("{}/chat", self.base_url))
            .json(&serde_json::json!({ "messages": history }))
            .send()
            .await
            .map_err(|err| err.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        consume_body(response.bytes_stream(), |accumulated| {
            self.conversation
                .send_modify(|conversation| conversation.apply_assistant_text(accumulated));
        })
        .await
        .map_err(|aborted| aborted.reason)
    }
}
