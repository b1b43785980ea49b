//! Error types for image storage operations

use aws_sdk_s3::{error::SdkError, operation::put_object::PutObjectError};
use thiserror::Error;

/// Result type for image storage operations
pub type ImageStorageResult<T> = Result<T, ImageStorageError>;

/// Errors that can occur during image storage operations
#[derive(Error, Debug)]
pub enum ImageStorageError {
    /// Content type outside the image allow-list
    #[error("Unsupported image content type: {0}")]
    UnsupportedContentType(String),

    /// S3 service error
    #[error("S3 service error: {0}")]
    S3Error(String),

    /// Upstream service error (5xx from S3)
    #[error("Upstream service error: {0}")]
    UpstreamError(String),

    /// AWS SDK error
    #[error("AWS SDK error: {0}")]
    AwsError(String),
}

impl From<SdkError<PutObjectError>> for ImageStorageError {
    fn from(error: SdkError<PutObjectError>) -> Self {
        match &error {
            SdkError::ServiceError(service_err) if service_err.raw().status().as_u16() >= 500 => {
                Self::UpstreamError(format!("{service_err:?}"))
            }
            SdkError::ServiceError(_) => Self::S3Error(error.to_string()),
            _ => Self::AwsError(error.to_string()),
        }
    }
}
