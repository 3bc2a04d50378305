//! Deterministic mock gateway client for relay and consumer tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::{Duration, sleep};

use crate::client::{FragmentStream, GenerateRequest, GenerativeClient};
use crate::error::{GatewayError, Result};

/// Scripted step for one fragment stream.
#[derive(Debug, Clone)]
pub enum MockStepKind {
    /// Emit a text fragment.
    Fragment(String),
    /// Fail the stream mid-sequence.
    Error(String),
}

/// Scripted stream step with optional delay.
#[derive(Debug, Clone)]
pub struct MockStep {
    pub delay_ms: u64,
    pub kind: MockStepKind,
}

impl MockStep {
    pub fn fragment(text: impl Into<String>) -> Self {
        Self {
            delay_ms: 0,
            kind: MockStepKind::Fragment(text.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            delay_ms: 0,
            kind: MockStepKind::Error(message.into()),
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// A deterministic mock gateway driven by scripted steps.
///
/// The whole script plays out as a single stream per call. Calls and their
/// requests are recorded so tests can assert the relay made exactly the
/// expected gateway calls.
#[derive(Clone, Default)]
pub struct MockClient {
    script: Arc<Mutex<VecDeque<MockStep>>>,
    fail_open: Arc<Mutex<Option<String>>>,
    call_count: Arc<AtomicUsize>,
    captured: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a stream of plain text fragments.
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps = fragments.into_iter().map(MockStep::fragment).collect();
        Self::from_steps(steps)
    }

    pub fn from_steps(steps: Vec<MockStep>) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::from(steps))),
            ..Self::default()
        }
    }

    /// Make `generate_stream` fail before producing any fragment.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_open: Arc::new(Mutex::new(Some(message.into()))),
            ..Self::default()
        }
    }

    /// Number of gateway calls made so far.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Requests captured across all calls.
    pub async fn captured_requests(&self) -> Vec<GenerateRequest> {
        self.captured.lock().await.clone()
    }
}

#[async_trait]
impl GenerativeClient for MockClient {
    fn provider(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate_stream(&self, request: GenerateRequest) -> Result<FragmentStream> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.captured.lock().await.push(request);

        if let Some(message) = self.fail_open.lock().await.take() {
            return Err(GatewayError::Model(message));
        }

        let steps: Vec<MockStep> = self.script.lock().await.drain(..).collect();

        Ok(Box::pin(async_stream::stream! {
            for step in steps {
                if step.delay_ms > 0 {
                    sleep(Duration::from_millis(step.delay_ms)).await;
                }
                match step.kind {
                    MockStepKind::Fragment(text) => yield Ok(text),
                    MockStepKind::Error(message) => {
                        yield Err(GatewayError::Stream(message));
                        return;
                    }
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;

    use super::*;

    #[tokio::test]
    async fn mock_client_plays_scripted_fragments_in_order() {
        let client = MockClient::from_fragments(["Hel", "lo", " world"]);

        let stream = client
            .generate_stream(GenerateRequest::single("sys", "ping"))
            .await
            .expect("mock stream should open");
        let fragments: Vec<String> = stream.try_collect().await.expect("stream should succeed");

        assert_eq!(fragments, ["Hel", "lo", " world"]);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn mock_client_fails_mid_stream_after_fragments() {
        let client = MockClient::from_steps(vec![
            MockStep::fragment("partial"),
            MockStep::error("upstream died"),
        ]);

        let mut stream = client
            .generate_stream(GenerateRequest::single("sys", "ping"))
            .await
            .expect("mock stream should open");

        use futures::StreamExt;
        let first = stream.next().await.expect("first item");
        assert_eq!(first.expect("first fragment"), "partial");
        let second = stream.next().await.expect("second item");
        assert!(second.is_err());
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn failing_mock_returns_error_before_any_fragment() {
        let client = MockClient::failing("no capacity");
        let result = client
            .generate_stream(GenerateRequest::single("sys", "ping"))
            .await;
        assert!(result.is_err());
        assert_eq!(client.call_count(), 1);
    }
}
