use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

/// Error body returned by every handler: `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(nd_core::Error);

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            nd_core::Error::NotFound(_) => StatusCode::NOT_FOUND,
            nd_core::Error::Widget(_)
            | nd_core::Error::Config(_)
            | nd_core::Error::Serialization(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<nd_core::Error> for ApiError {
    fn from(err: nd_core::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("Request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
