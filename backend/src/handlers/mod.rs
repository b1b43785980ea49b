use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

mod health;
mod pets;

/// Creates the router with all handler routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::handler))
        .route("/v1/pets", post(pets::create_pet).options(pets::preflight))
}
