use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use redline_ai::GatewayError;
use serde_json::json;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "code": self.status.as_u16(),
                "message": self.message,
            }
        }));
        (self.status, body).into_response()
    }
}

/// Every gateway failure that happens before the body starts is a 500:
/// a missing credential is a configuration error, anything else means the
/// upstream call failed before the first byte.
impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        tracing::error!(error = %err, "gateway error before stream start");
        Self::internal(err.to_string())
    }
}
