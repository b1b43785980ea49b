//! S3-based image storage operations
mod error;

use std::sync::Arc;

use aws_sdk_s3::{primitives::ByteStream, types::ChecksumAlgorithm, Client as S3Client};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

pub use error::{ImageStorageError, ImageStorageResult};

/// Folder inside the bucket; the gateway serves it under `/assets/pets/…`
const IMAGE_FOLDER: &str = "pets";

/// Image storage client for S3 operations
pub struct ImageStorage {
    s3_client: Arc<S3Client>,
    bucket_name: String,
}

impl ImageStorage {
    /// Creates a new image storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - S3 bucket name for submission images
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>, bucket_name: String) -> Self {
        Self {
            s3_client,
            bucket_name,
        }
    }

    fn extension_for(content_type: &str) -> ImageStorageResult<&'static str> {
        match content_type {
            "image/jpeg" => Ok("jpeg"),
            "image/png" => Ok("png"),
            "image/webp" => Ok("webp"),
            "image/gif" => Ok("gif"),
            other => Err(ImageStorageError::UnsupportedContentType(other.to_string())),
        }
    }

    /// Maps image bytes to their content-addressed object key
    ///
    /// Identical bytes always map to the same key, so a retried upload
    /// overwrites its own object instead of creating a duplicate.
    ///
    /// # Errors
    ///
    /// Returns `ImageStorageError::UnsupportedContentType` for content types
    /// outside the image allow-list
    pub fn content_key(bytes: &[u8], content_type: &str) -> ImageStorageResult<String> {
        let extension = Self::extension_for(content_type)?;
        let digest = hex::encode(Sha256::digest(bytes));
        Ok(format!("{IMAGE_FOLDER}/{digest}.{extension}"))
    }

    /// Uploads one image and returns its object key
    ///
    /// The put carries a SHA-256 checksum header, so a corrupted transfer is
    /// rejected by S3 rather than stored.
    ///
    /// # Errors
    ///
    /// Returns `ImageStorageError::UnsupportedContentType` before any S3 call
    /// for content types outside the allow-list
    /// Returns `ImageStorageError::UpstreamError` for 5xx errors from S3
    /// Returns `ImageStorageError::S3Error` for other S3 service errors
    pub async fn upload(&self, bytes: &[u8], content_type: &str) -> ImageStorageResult<String> {
        let key = Self::content_key(bytes, content_type)?;
        let checksum = STANDARD.encode(Sha256::digest(bytes));

        debug!("Uploading image: {} ({} bytes)", key, bytes.len());

        self.s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(&key)
            .body(ByteStream::from(bytes.to_vec()))
            .content_type(content_type)
            .checksum_sha256(checksum)
            .checksum_algorithm(ChecksumAlgorithm::Sha256)
            .send()
            .await?;

        Ok(key)
    }

    /// Best-effort removal of uploaded objects after a failed creation
    ///
    /// Removal failures are logged and swallowed; compensation must never
    /// mask the error that triggered it.
    pub async fn remove_all(&self, keys: &[String]) {
        for key in keys {
            let result = self
                .s3_client
                .delete_object()
                .bucket(&self.bucket_name)
                .key(key)
                .send()
                .await;

            if let Err(e) = result {
                warn!("Failed to remove orphaned image {key}: {e}");
            }
        }
    }
}
