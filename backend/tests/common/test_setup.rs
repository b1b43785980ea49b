use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_s3::Client as S3Client;
use axum::{body::Body, http::Request, response::Response, Router};
use backend::{
    handlers, image_storage::ImageStorage, middleware::apply_gateway_headers, state::AppState,
    types::Environment,
};
use pet_storage::pet_record::PetRecordStorage;
use tower::ServiceExt;

use super::dynamodb_setup::DynamoDbTestSetup;
use super::s3_setup::S3TestSetup;

/// Setup test environment variables with all the required configuration
pub fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.example").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Base test setup with core dependencies
#[allow(dead_code)]
pub struct TestSetup {
    pub router: Router,
    pub s3_client: Arc<S3Client>,
    pub dynamodb_client: Arc<DynamoDbClient>,
    pub pet_storage: Arc<PetRecordStorage>,
    // Keep the bucket/table setups alive for the duration of the test
    pub s3: S3TestSetup,
    pub dynamodb: DynamoDbTestSetup,
}

impl TestSetup {
    pub async fn new() -> Self {
        setup_test_env();

        let environment = Environment::Development;

        let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
        let s3 = S3TestSetup::new(s3_client.clone()).await;

        let dynamodb_client = Arc::new(DynamoDbClient::new(&environment.aws_config().await));
        let dynamodb = DynamoDbTestSetup::new(dynamodb_client.clone()).await;

        let image_storage = Arc::new(ImageStorage::new(
            s3_client.clone(),
            s3.bucket_name.clone(),
        ));
        let pet_storage = Arc::new(PetRecordStorage::new(
            dynamodb_client.clone(),
            dynamodb.pets_table_name.clone(),
        ));

        // Assemble the router the way the server does, gateway headers outermost
        let router = handlers::routes()
            .with_state(AppState {
                image_storage,
                pet_storage: pet_storage.clone(),
            })
            .layer(axum::middleware::from_fn(apply_gateway_headers));

        Self {
            router,
            s3_client,
            dynamodb_client,
            pet_storage,
            s3,
            dynamodb,
        }
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_raw_post_request(route, payload.to_string()).await
    }

    /// Sends a POST request with an arbitrary (possibly malformed) body
    pub async fn send_raw_post_request(
        &self,
        route: &str,
        body: String,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(body))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_options_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("OPTIONS")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn parse_response_body(
        &self,
        response: Response,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        use http_body_util::BodyExt;

        let body = response.into_body().collect().await?.to_bytes();
        let json = serde_json::from_slice(&body)?;
        Ok(json)
    }
}
