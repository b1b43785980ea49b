//! Custom extractors for request validation

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::types::error::AppError;

/// Custom JSON extractor that validates the payload
///
/// Rejections happen before the handler body runs, so a request that fails to
/// parse or validate never reaches storage.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: serde::de::DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // First extract JSON
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| match err {
                JsonRejection::MissingJsonContentType(_) => {
                    AppError::parse("Missing Content-Type: application/json header")
                }
                rejection => AppError::parse(rejection.body_text()),
            })?;

        // Then validate
        payload
            .validate()
            .map_err(|errors| AppError::validation(validation_message(&errors)))?;

        Ok(Self(payload))
    }
}

/// Renders validation failures as a deterministic, field-ordered message
fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .errors()
        .iter()
        .map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let rule = field_errors.first().map_or_else(
                    || "invalid".to_string(),
                    |e| {
                        e.message
                            .clone()
                            .unwrap_or_else(|| e.code.clone())
                            .into_owned()
                    },
                );
                format!("{field}: {rule}")
            }
            ValidationErrorsKind::Struct(_) | ValidationErrorsKind::List(_) => {
                format!("{field}: invalid")
            }
        })
        .collect();
    parts.sort();
    format!("Validation failed - {}", parts.join("; "))
}
