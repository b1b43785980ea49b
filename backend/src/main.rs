use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_s3::Client as S3Client;

use backend::{image_storage::ImageStorage, server, state::AppState, types::Environment};
use pet_storage::pet_record::PetRecordStorage;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Configure logging format based on environment
    // Use JSON format for staging/production, regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
        Environment::Development => {
            fmt().with_env_filter(EnvFilter::from_default_env()).init();
        }
    }

    let aws_config = environment.aws_config().await;

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let image_storage = Arc::new(ImageStorage::new(s3_client, environment.s3_bucket()));

    let dynamodb_client = Arc::new(DynamoDbClient::new(&aws_config));
    let pet_storage = Arc::new(PetRecordStorage::new(
        dynamodb_client,
        environment.pets_table(),
    ));

    server::start(AppState {
        image_storage,
        pet_storage,
    })
    .await
}
