use axum::{extract::State, http::StatusCode, Json};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;
use validator::Validate;

use pet_storage::pet_record::PetRecord;

use crate::{
    state::AppState,
    types::{AppError, ValidatedJson},
};

/// Confirmation shown on the website, in the site's language
const CONFIRMATION_MESSAGE: &str = "Podopieczny został stworzony.";

/// Decoded size cap per image - 15 MiB
const MAX_IMAGE_BYTES: usize = 15_728_640;

static CONTENT_TYPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^image/(jpeg|png|webp|gif)$").expect("Invalid regex"));

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreatePetRequest {
    /// Pet name, 1-100 characters
    #[validate(length(min = 1, max = 100, message = "invalid_name_length"))]
    pub name: String,
    /// Contact e-mail of the submitter
    #[validate(email(message = "invalid_email"))]
    pub email: String,
    /// Free-form submission message, 1-2000 characters
    #[validate(length(min = 1, max = 2000, message = "invalid_message_length"))]
    pub message: String,
    /// Up to 10 photos; may be empty
    #[validate(length(max = 10, message = "too_many_images"))]
    #[validate(nested)]
    pub images: Vec<ImagePayload>,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ImagePayload {
    /// One of image/jpeg, image/png, image/webp, image/gif
    #[validate(regex(path = *CONTENT_TYPE_REGEX, message = "unsupported_content_type"))]
    pub content_type: String,
    /// Standard base64 of the raw image bytes
    #[validate(length(min = 1, message = "empty_image_data"))]
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePetResponse {
    pub message: String,
}

/// Creates a pet record from a website submission
///
/// Images are decoded before any storage call, uploaded under
/// content-addressed keys, and the record write is conditional on the id
/// being fresh. The first failure aborts the whole creation; uploads that
/// already happened are removed best-effort if the record write fails.
#[instrument(skip(app_state, payload))]
pub async fn create_pet(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePetRequest>,
) -> Result<Json<CreatePetResponse>, AppError> {
    info!("Received pet submission with {} images", payload.images.len());

    // Decode every image before touching storage, so a bad payload cannot
    // leave a partial upload behind.
    let mut decoded = Vec::with_capacity(payload.images.len());
    for (index, image) in payload.images.iter().enumerate() {
        let bytes = STANDARD.decode(&image.data).map_err(|e| {
            AppError::validation(format!("images[{index}].data: invalid base64 ({e})"))
        })?;
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(AppError::validation(format!(
                "images[{index}].data: decoded size exceeds {MAX_IMAGE_BYTES} bytes"
            )));
        }
        decoded.push((bytes, image.content_type.as_str()));
    }

    // Upload in order; the first failure aborts the whole creation
    let mut image_keys = Vec::with_capacity(decoded.len());
    for (bytes, content_type) in &decoded {
        let key = app_state.image_storage.upload(bytes, content_type).await?;
        debug!("Stored image at {key}");
        image_keys.push(key);
    }

    let record = PetRecord {
        pet_id: Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        message: payload.message,
        image_keys: image_keys.clone(),
        created_at: Utc::now().timestamp(),
    };

    if let Err(err) = app_state.pet_storage.insert(&record).await {
        // The uploads succeeded but the record write did not; remove the
        // objects so a failed creation leaves nothing behind.
        app_state.image_storage.remove_all(&image_keys).await;
        return Err(err.into());
    }

    info!("Pet record {} created", record.pet_id);

    Ok(Json(CreatePetResponse {
        message: CONFIRMATION_MESSAGE.to_string(),
    }))
}

/// Preflight response; the gateway exposes OPTIONS alongside POST
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
