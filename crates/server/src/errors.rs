use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Error response with body `{ "error": ..., "details"?: ... }`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, details: Option<String>) -> Self {
        Self { status, body: ErrorBody { error: error.into(), details } }
    }

    /// Map a service failure to its HTTP status. `context` names the failed
    /// operation and is only used for internal errors, whose driver message
    /// goes to `details`.
    pub fn from_service(e: ServiceError, context: &str) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg, None),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg, None),
            ServiceError::Db(msg) => {
                error!(err = %msg, context, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, context, Some(msg))
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid JSON body", Some(r.body_text()))
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid path parameter", Some(r.body_text()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
