//! Universal error handling for the API
//!
//! Every fault is converted into the fixed failure shape `{"error": …}`.
//! Parse and validation detail is client-controlled input and is echoed;
//! infrastructure fault text is logged here and replaced with a classified
//! message before it reaches the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::image_storage::ImageStorageError;
use pet_storage::pet_record::PetRecordStorageError;

/// Failure response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Application error type carrying the response status and message
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A malformed request body (the parser's fault message is kept verbatim)
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// A request that failed field validation
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// The response status
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// The message placed in the `error` body field
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {} - {}", self.status, self.message),
            500..=599 => tracing::error!("Server error: {} - {}", self.status, self.message),
            _ => {}
        }

        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

/// Convert image storage errors to application errors
impl From<ImageStorageError> for AppError {
    fn from(err: ImageStorageError) -> Self {
        use ImageStorageError::{AwsError, S3Error, UnsupportedContentType, UpstreamError};

        match &err {
            UnsupportedContentType(content_type) => Self::validation(format!(
                "Unsupported image content type: {content_type}"
            )),
            UpstreamError(msg) => {
                tracing::error!("S3 upstream error: {msg}");
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Object storage temporarily unavailable",
                )
            }
            S3Error(msg) | AwsError(msg) => {
                tracing::error!("S3/AWS error: {msg}");
                Self::new(StatusCode::BAD_GATEWAY, "Image upload failed")
            }
        }
    }
}

/// Convert pet record storage errors to application errors
impl From<PetRecordStorageError> for AppError {
    fn from(err: PetRecordStorageError) -> Self {
        match &err {
            PetRecordStorageError::PetRecordExists => {
                tracing::debug!("Pet record already exists");
                Self::new(StatusCode::CONFLICT, "Record already exists")
            }
            other => {
                tracing::error!("DynamoDB error: {other}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Record persistence failed")
            }
        }
    }
}
