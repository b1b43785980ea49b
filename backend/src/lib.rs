//! mrau backend service
//!
//! Accepts pet submissions from the shelter website, stores submission photos
//! in S3, persists the record in DynamoDB and answers with the confirmation
//! message the site displays.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Handler modules
pub mod handlers;

/// S3 image storage operations
pub mod image_storage;

/// Response middleware
pub mod middleware;

/// Server wiring
pub mod server;

/// Application state
pub mod state;

/// Configuration, error handling and extractors
pub mod types;
