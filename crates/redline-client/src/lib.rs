//! Page-session side of the Redline style-review service.
//!
//! Reads a streamed HTTP response body incrementally, decodes bytes to text
//! with a stateful decoder, and republishes the growing value after every
//! increment so a UI can re-render it. For chat, the conversation list
//! grows by exactly one assistant entry per exchange, and a trailing
//! suggestions block is split off once the stream completes.
//!
//! Everything here lives for a single page session; nothing is persisted.

pub mod consumer;
pub mod conversation;
pub mod decode;
pub mod error;
pub mod session;
pub mod suggestions;

pub use consumer::consume_body;
pub use conversation::Conversation;
pub use decode::StreamDecoder;
pub use error::StreamAborted;
pub use session::{ChatSession, ReviewSession, SUGGESTED_PROMPTS};
pub use suggestions::{SUGGESTIONS_MARKER, split_suggestions};
