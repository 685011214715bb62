//! Field presence rules shared by every entity.
//!
//! A text field is missing when absent or empty; whitespace counts as a
//! value. A reference id is missing when absent or zero.

use crate::errors::ModelError;

pub fn required_text<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, ModelError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ModelError::Validation(format!("field \"{field}\" is required"))),
    }
}

pub fn required_id(field: &str, value: Option<i32>) -> Result<i32, ModelError> {
    match value {
        Some(id) if id != 0 => Ok(id),
        _ => Err(ModelError::Validation(format!("field \"{field}\" is required"))),
    }
}

/// Absent is fine (left untouched); present-but-empty is rejected.
pub fn optional_text<'a>(field: &str, value: Option<&'a str>) -> Result<Option<&'a str>, ModelError> {
    match value {
        Some(v) if v.is_empty() => Err(ModelError::Validation(format!("field \"{field}\" must not be empty"))),
        other => Ok(other),
    }
}
