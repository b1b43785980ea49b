use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use pet_storage::pet_record::{PetRecord, PetRecordAttribute};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Helper for creating and managing DynamoDB tables in tests
pub struct DynamoDbTestSetup {
    client: Arc<DynamoDbClient>,
    pub pets_table_name: String,
}

impl DynamoDbTestSetup {
    pub async fn new(client: Arc<DynamoDbClient>) -> Self {
        let pets_table_name = Self::create_pets_table(&client).await;

        Self {
            client,
            pets_table_name,
        }
    }

    /// Creates a test pets table with a unique name
    async fn create_pets_table(client: &DynamoDbClient) -> String {
        let table_name = format!("test-pets-{}", Uuid::new_v4());

        client
            .create_table()
            .table_name(&table_name)
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name(PetRecordAttribute::PetId.to_string())
                    .attribute_type(ScalarAttributeType::S)
                    .build()
                    .unwrap(),
            )
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name(PetRecordAttribute::PetId.to_string())
                    .key_type(KeyType::Hash)
                    .build()
                    .unwrap(),
            )
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .expect("Failed to create test table");

        // Wait for table to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        table_name
    }

    /// Returns every record currently in the pets table
    pub async fn scan_records(&self) -> Vec<PetRecord> {
        let response = self
            .client
            .scan()
            .table_name(&self.pets_table_name)
            .send()
            .await
            .expect("Failed to scan pets table");

        response
            .items()
            .iter()
            .map(|item| serde_dynamo::from_item(item.clone()).expect("Failed to parse record"))
            .collect()
    }
}

impl Drop for DynamoDbTestSetup {
    fn drop(&mut self) {
        // Clean up the table
        let client = self.client.clone();
        let pets_table_name = self.pets_table_name.clone();

        // Use tokio runtime to delete table
        let handle = tokio::runtime::Handle::try_current();
        if let Ok(handle) = handle {
            handle.spawn(async move {
                let _ = client
                    .delete_table()
                    .table_name(&pets_table_name)
                    .send()
                    .await;
            });
        }
    }
}
