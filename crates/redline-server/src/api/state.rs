use std::sync::Arc;

use redline_ai::{GatewayError, GeminiClient, GenerativeClient};

/// Environment variable holding the model API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Resolves the generative client for one request.
///
/// Resolution runs on every request rather than once at boot, so the
/// credential check stays independent of process lifetime. Tests substitute
/// a resolver that hands out a scripted mock client.
pub trait GatewayResolver: Send + Sync {
    fn resolve(&self) -> Result<Arc<dyn GenerativeClient>, GatewayError>;
}

/// Production resolver: builds a Gemini client from `GEMINI_API_KEY`.
#[derive(Debug, Default)]
pub struct EnvGateway {
    model: Option<String>,
}

impl EnvGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
        }
    }
}

impl GatewayResolver for EnvGateway {
    fn resolve(&self) -> Result<Arc<dyn GenerativeClient>, GatewayError> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| GatewayError::MissingCredential(API_KEY_ENV))?;

        let mut client = GeminiClient::new(api_key);
        if let Some(model) = &self.model {
            client = client.with_model(model);
        }
        Ok(Arc::new(client))
    }
}

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn GatewayResolver>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn GatewayResolver>) -> Self {
        Self { gateway }
    }

    pub fn from_env() -> Self {
        Self::new(Arc::new(EnvGateway::new()))
    }
}
