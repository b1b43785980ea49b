//! Error types for pet record storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{get_item::GetItemError, put_item::PutItemError};
use thiserror::Error;

/// Result type alias for storage operations
pub type PetRecordStorageResult<T> = Result<T, PetRecordStorageError>;

/// Storage error types for pet record operations
#[derive(Debug, Error)]
pub enum PetRecordStorageError {
    /// A record with the same `pet_id` already exists
    #[error("Pet record already exists")]
    PetRecordExists,

    /// Failed to insert pet record into `DynamoDB`
    #[error("Failed to insert pet record into DynamoDB: {0:?}")]
    DynamoDbPutError(#[from] SdkError<PutItemError>),

    /// Failed to get pet record from `DynamoDB`
    #[error("Failed to get pet record from DynamoDB: {0:?}")]
    DynamoDbGetError(#[from] SdkError<GetItemError>),

    /// Failed to (de)serialize a pet record item
    #[error("Failed to parse pet record: {0}")]
    SerializationError(String),
}

impl From<serde_dynamo::Error> for PetRecordStorageError {
    fn from(err: serde_dynamo::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
