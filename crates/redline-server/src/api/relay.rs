use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use redline_ai::FragmentStream;

/// Re-emit a gateway fragment sequence as a live plain-text body.
///
/// Fragments pass through one-to-one as they arrive; nothing is buffered or
/// batched, and order is preserved. The transport applies chunked encoding
/// to the length-less body. An error item from the gateway aborts the body
/// mid-flight: bytes already sent stand, and the client must treat early
/// termination as failure.
pub(crate) fn relay_response(fragments: FragmentStream) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from_stream(fragments))
        .unwrap_or_else(|_| {
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response").into_response()
        })
}
