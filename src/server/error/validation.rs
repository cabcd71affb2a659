use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{FieldErrorDto, ValidationErrorDto};

/// A single rejected field with a human readable reason.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Request input failed one or more field rules.
///
/// Lists every offending field, not just the first, so clients can fix a form in
/// one round trip.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Validation failed for: {}", .fields.iter().map(|f| f.field.as_str()).collect::<Vec<_>>().join(", "))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    /// Creates a validation error for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            fields: vec![FieldError {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    /// Returns true when the given field is among the offending ones.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

/// A body that isn't JSON for the expected shape is reported on the `body` field.
impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::field("body", rejection.body_text())
    }
}

/// Converts validation errors into a 400 Bad Request listing the offending fields.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let fields = self
            .fields
            .into_iter()
            .map(|f| FieldErrorDto {
                field: f.field,
                message: f.message,
            })
            .collect();

        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                error: "Invalid request".to_string(),
                fields,
            }),
        )
            .into_response()
    }
}
