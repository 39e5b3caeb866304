//! Request validation extractors.
//!
//! Routes declare their field rules with `validator` derives on the DTO;
//! [`ValidatedJson`] runs them after deserialization and rejects with a
//! `400 {"errors": [...]}` payload listing every violation, so the handler
//! never sees an invalid body. [`ValidatedId`] does the same for UUID path
//! segments.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// Rejection carrying the full list of validation failures.
#[derive(Debug)]
pub struct ValidationRejection {
    pub errors: Vec<String>,
}

impl ValidationRejection {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        let body = Json(json!({ "errors": self.errors }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

fn collect_errors(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return ValidationRejection::single(format!("{} is required", field));
                }

                // serde's enum message names the accepted values
                if let Some(pos) = error_msg.find("unknown variant") {
                    let msg = error_msg[pos..]
                        .split(" at line")
                        .next()
                        .unwrap_or("unknown variant");
                    return ValidationRejection::single(msg);
                }

                if error_msg.contains("invalid type") {
                    return ValidationRejection::single("Invalid field type in request");
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return ValidationRejection::single(
                        "Missing 'Content-Type: application/json' header",
                    );
                }

                ValidationRejection::single("Invalid request body")
            })?;

        value
            .validate()
            .map_err(|errors| ValidationRejection::new(collect_errors(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// UUID path-segment check with a stable rejection message.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedId(pub Uuid);

impl<S> FromRequestParts<S> for ValidatedId
where
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| ValidatedId(id))
            .map_err(|_| ValidationRejection::single("Invalid post ID"))
    }
}
