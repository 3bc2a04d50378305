//! Stream relay for the Redline style-review service.
//!
//! Two POST endpoints accept a document or a conversation, forward it to
//! the model gateway with the fixed style-guide instruction, and re-emit
//! the gateway's fragment stream as a chunked plain-text response body.
//! Every request is independent: no queueing, no retries, no shared state.

pub mod api;
pub mod config;
pub mod prompts;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use api::AppState;

#[derive(serde::Serialize)]
struct Health {
    status: String,
}

async fn health() -> axum::Json<Health> {
    axum::Json(Health {
        status: "redline is working!".to_string(),
    })
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/review", post(api::review::review_document))
        .route("/chat", post(api::chat::chat))
        .layer(cors)
        .with_state(state)
}
