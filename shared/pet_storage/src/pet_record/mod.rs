//! Pet record storage integration using Dynamo DB
//!
//! One item per accepted submission, keyed by `pet_id`. The backend writes
//! records after the submission's images have landed in the bucket.

mod error;

use std::sync::Arc;

use aws_sdk_dynamodb::{error::SdkError, types::AttributeValue, Client as DynamoDbClient};
use serde::{Deserialize, Serialize};

pub use error::{PetRecordStorageError, PetRecordStorageResult};
use strum::Display;

/// Attribute names for the pet record table
#[derive(Debug, Clone, Display)]
#[strum(serialize_all = "snake_case")]
pub enum PetRecordAttribute {
    /// Record identifier (Primary Key)
    PetId,
    /// Pet name as submitted
    Name,
    /// Contact e-mail of the submitter
    Email,
    /// Free-form submission message
    Message,
    /// Object-storage keys of the uploaded images
    ImageKeys,
    /// Creation timestamp (Unix seconds)
    CreatedAt,
}

/// Pet record data structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    /// Record identifier (Primary Key)
    pub pet_id: String,
    /// Pet name as submitted
    pub name: String,
    /// Contact e-mail of the submitter
    pub email: String,
    /// Free-form submission message
    pub message: String,
    /// Object-storage keys of the uploaded images
    pub image_keys: Vec<String>,
    /// Creation timestamp (Unix seconds)
    pub created_at: i64,
}

/// Pet record storage client for Dynamo DB operations
pub struct PetRecordStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl PetRecordStorage {
    /// Creates a new pet record storage client
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured Dynamo DB client
    /// * `table_name` - Dynamo DB table name for pet records
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Inserts a pet record, failing if one already exists with the same `pet_id`
    ///
    /// The conditional put means a replayed write cannot silently overwrite an
    /// existing record.
    ///
    /// # Arguments
    ///
    /// * `record` - The pet record to insert
    ///
    /// # Errors
    ///
    /// Returns `PetRecordStorageError::PetRecordExists` if a record with the
    /// same `pet_id` already exists, or another `PetRecordStorageError` if the
    /// Dynamo DB operation fails
    pub async fn insert(&self, record: &PetRecord) -> PetRecordStorageResult<()> {
        let item = serde_dynamo::to_item(record)
            .map_err(|e| PetRecordStorageError::SerializationError(e.to_string()))?;

        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(#pk)")
            .expression_attribute_names("#pk", PetRecordAttribute::PetId.to_string())
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    PetRecordStorageError::PetRecordExists
                } else {
                    err.into()
                }
            })?;

        Ok(())
    }

    /// Gets a single pet record by its identifier
    ///
    /// # Arguments
    ///
    /// * `pet_id` - The record identifier
    ///
    /// # Returns
    ///
    /// An optional pet record if found
    ///
    /// # Errors
    ///
    /// Returns `PetRecordStorageError` if the Dynamo DB operation fails
    pub async fn get(&self, pet_id: &str) -> PetRecordStorageResult<Option<PetRecord>> {
        let response = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .key(
                PetRecordAttribute::PetId.to_string(),
                AttributeValue::S(pet_id.to_string()),
            )
            .send()
            .await?;

        response
            .item()
            .map(|item| {
                serde_dynamo::from_item(item.clone())
                    .map_err(|e| PetRecordStorageError::SerializationError(e.to_string()))
            })
            .transpose()
    }
}
