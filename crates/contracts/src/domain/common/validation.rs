//! Field-level validation shared by all entity forms

use std::collections::BTreeMap;
use thiserror::Error;

/// Validation failures keyed by form field name
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// One or more fields failed validation; nothing may be submitted.
    #[error("el formulario contiene errores")]
    Invalid(FieldErrors),
    /// Form-level failure that is not tied to a single input (attributes JSON).
    #[error("{0}")]
    Form(String),
}

impl FormError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            FormError::Invalid(errors) => Some(errors),
            FormError::Form(_) => None,
        }
    }
}

pub const MSG_NAME_REQUIRED: &str = "El nombre es requerido";

/// Trim and require a non-empty value of at most `max` characters.
pub fn required(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    max: usize,
    required_msg: &str,
    max_msg: &str,
) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, required_msg.to_string());
    } else if value.chars().count() > max {
        errors.insert(field, max_msg.to_string());
    }
    value.to_string()
}

/// Trim an optional value and check its length; empty input becomes `None`.
pub fn optional(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    max: usize,
    max_msg: &str,
) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if value.chars().count() > max {
        errors.insert(field, max_msg.to_string());
    }
    Some(value.to_string())
}

/// Loose URL shape check: scheme `http`/`https` followed by a host.
pub fn is_url_shaped(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
            !host.is_empty() && !host.contains(char::is_whitespace)
        }
        None => false,
    }
}

pub fn finish<T>(errors: FieldErrors, payload: T) -> Result<T, FormError> {
    if errors.is_empty() {
        Ok(payload)
    } else {
        Err(FormError::Invalid(errors))
    }
}
