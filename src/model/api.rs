use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// A single offending field in a rejected request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    pub fields: Vec<FieldErrorDto>,
}

/// Envelope wrapping every successful response body as `{ "result": ... }`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResultDto<T> {
    pub result: T,
}

impl<T> ResultDto<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

/// Raw `limit`/`offset` query parameters.
///
/// Kept as strings so malformed values surface as field validation errors
/// instead of extractor rejections.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQueryDto {
    /// Maximum number of entries to return (1-100, default 10)
    pub limit: Option<String>,
    /// Number of entries to skip (default 0)
    pub offset: Option<String>,
}
