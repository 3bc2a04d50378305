//! Model gateway for the Redline style-review service.
//!
//! Wraps the hosted generative-model API behind the [`GenerativeClient`]
//! trait: given a system instruction and a list of role-tagged turns, it
//! produces a lazy sequence of text fragments. Fragment boundaries carry no
//! meaning; concatenation in emission order reconstructs the response.

pub mod client;
pub mod error;
pub mod gemini;
mod http_client;
pub mod mock;

pub use client::{Fragment, FragmentStream, GenerateRequest, GenerativeClient, Role, Turn};
pub use error::{GatewayError, Result};
pub use gemini::GeminiClient;
pub use mock::{MockClient, MockStep};
