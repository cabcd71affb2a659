//! Declarative per-field request validation.
//!
//! A `Validator` collects every failing field of a request instead of stopping at the
//! first one. Each checker returns the normalized value when the field is valid, or
//! `None` when it is absent or invalid; callers read the values only after `finish()`
//! returned `Ok`, so required values can be unwrapped with `unwrap_or_default()`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    model::page::PageStatus,
    server::error::validation::{FieldError, ValidationError},
};

/// Upper bound for names, emails and slugs.
pub const MAX_TEXT_LENGTH: usize = 255;
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Whether a missing field is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// Missing is fine (partial updates); present values are still checked.
    Optional,
}

#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Returns the value, or records an error when a required one is missing.
    fn present<'v>(
        &mut self,
        field: &str,
        value: Option<&'v str>,
        presence: Presence,
    ) -> Option<&'v str> {
        if value.is_none() && presence == Presence::Required {
            self.reject(field, "is required");
        }
        value
    }

    /// Any present value, used where only presence matters.
    pub fn required(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        let value = self.present(field, value, Presence::Required)?;
        if value.is_empty() {
            self.reject(field, "must not be empty");
            return None;
        }
        Some(value.to_string())
    }

    /// Trimmed, 1 to 255 characters.
    pub fn name(&mut self, field: &str, value: Option<&str>, presence: Presence) -> Option<String> {
        let value = self.present(field, value, presence)?.trim();

        if value.is_empty() {
            self.reject(field, "must not be empty");
            return None;
        }
        if value.chars().count() > MAX_TEXT_LENGTH {
            self.reject(field, format!("must be at most {} characters", MAX_TEXT_LENGTH));
            return None;
        }

        Some(value.to_string())
    }

    /// Trimmed and lower-cased, must look like an address.
    pub fn email(&mut self, field: &str, value: Option<&str>, presence: Presence) -> Option<String> {
        let value = self.present(field, value, presence)?.trim().to_lowercase();

        if value.chars().count() > MAX_TEXT_LENGTH {
            self.reject(field, format!("must be at most {} characters", MAX_TEXT_LENGTH));
            return None;
        }
        if !EMAIL_RE.is_match(&value) {
            self.reject(field, "must be a valid email address");
            return None;
        }

        Some(value)
    }

    /// Must contain something besides whitespace. Returned untrimmed.
    pub fn content(
        &mut self,
        field: &str,
        value: Option<&str>,
        presence: Presence,
    ) -> Option<String> {
        let value = self.present(field, value, presence)?;

        if value.trim().is_empty() {
            self.reject(field, "must not be empty");
            return None;
        }

        Some(value.to_string())
    }

    /// Lower-case words separated by single hyphens.
    pub fn slug(&mut self, field: &str, value: Option<&str>, presence: Presence) -> Option<String> {
        let value = self.present(field, value, presence)?;

        if value.len() > MAX_TEXT_LENGTH {
            self.reject(field, format!("must be at most {} characters", MAX_TEXT_LENGTH));
            return None;
        }
        if !SLUG_RE.is_match(value) {
            self.reject(
                field,
                "must contain only lower-case letters, digits and single hyphens",
            );
            return None;
        }

        Some(value.to_string())
    }

    pub fn password(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        let value = self.present(field, value, Presence::Required)?;

        if value.chars().count() < MIN_PASSWORD_LENGTH {
            self.reject(
                field,
                format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
            );
            return None;
        }

        Some(value.to_string())
    }

    /// Optional `drafted` / `published`.
    pub fn page_status(&mut self, field: &str, value: Option<&str>) -> Option<PageStatus> {
        let value = value?;

        let status = PageStatus::parse(value);
        if status.is_none() {
            self.reject(field, "must be one of: drafted, published");
        }
        status
    }

    /// Positive integer parsed from a raw path segment.
    pub fn id(&mut self, field: &str, value: &str) -> Option<i32> {
        match value.trim().parse::<i32>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                self.reject(field, "must be a positive integer");
                None
            }
        }
    }

    /// Required positive integer from a JSON body.
    pub fn id_value(&mut self, field: &str, value: Option<i64>) -> Option<i32> {
        let Some(value) = value else {
            self.reject(field, "is required");
            return None;
        };

        match i32::try_from(value) {
            Ok(id) if id > 0 => Some(id),
            _ => {
                self.reject(field, "must be a positive integer");
                None
            }
        }
    }

    /// 1 to 100, defaults to 10 when absent.
    pub fn limit(&mut self, value: Option<&str>) -> u64 {
        let Some(value) = value else {
            return DEFAULT_LIMIT;
        };

        match value.trim().parse::<u64>() {
            Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => limit,
            _ => {
                self.reject(
                    "limit",
                    format!("must be an integer between 1 and {}", MAX_LIMIT),
                );
                DEFAULT_LIMIT
            }
        }
    }

    /// Zero or more, defaults to 0 when absent.
    pub fn offset(&mut self, value: Option<&str>) -> u64 {
        let Some(value) = value else {
            return 0;
        };

        match value.trim().parse::<u64>() {
            Ok(offset) => offset,
            Err(_) => {
                self.reject("offset", "must be a non-negative integer");
                0
            }
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                fields: self.errors,
            })
        }
    }
}

/// Validates a single path id.
pub fn validate_id(field: &str, value: &str) -> Result<i32, ValidationError> {
    let mut validator = Validator::new();
    let id = validator.id(field, value);
    validator.finish()?;
    Ok(id.unwrap_or_default())
}
