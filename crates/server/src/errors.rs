use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Client-facing text for 500s; driver detail stays in the logs.
pub const INTERNAL_MESSAGE: &str = "Erro interno.";

/// JSON error body: `{"error": <title>, "mensagem": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub mensagem: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, mensagem: Option<String>) -> Self {
        Self { status, error, mensagem }
    }

    pub fn bad_request(mensagem: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(mensagem.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "mensagem": self.mensagem});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let msg = Some(e.to_string());
        match e {
            ServiceError::DuplicateEmail => JsonApiError::new(StatusCode::CONFLICT, "Conflict", msg),
            ServiceError::InvalidData => JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", msg),
            ServiceError::NotFound => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", msg),
            ServiceError::Storage(_) => {
                error!(err = %e, code = e.code(), "storage failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(INTERNAL_MESSAGE.into()))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}
