use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database::StoreError;
use serde_json::json;

/// An API failure: a status code plus a message rendered as
/// `{"error": "..."}`, the only error shape this API speaks.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let status = match err {
            StoreError::GameNotFound(_)
            | StoreError::RoundNotFound(_)
            | StoreError::RoleNotFound(_) => StatusCode::NOT_FOUND,
            StoreError::InsufficientPlayers(_)
            | StoreError::NoBrandsAvailable
            | StoreError::InvalidStatus(_)
            | StoreError::StatusRegression { .. }
            | StoreError::UuidParsing(_) => StatusCode::BAD_REQUEST,
            StoreError::Query(_)
            | StoreError::Transaction(_)
            | StoreError::Serialization(_)
            | StoreError::SeedData(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            log::error!("{}", self.message);
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
