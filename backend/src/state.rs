//! Application state management

use std::sync::Arc;

use pet_storage::pet_record::PetRecordStorage;

use crate::image_storage::ImageStorage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// S3 image storage for submission photos
    pub image_storage: Arc<ImageStorage>,
    /// DynamoDB pet record storage
    pub pet_storage: Arc<PetRecordStorage>,
}
