pub mod chat;
pub mod error;
mod relay;
pub mod review;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
