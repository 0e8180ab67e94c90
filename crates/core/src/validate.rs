//! Required-field checks applied at the API boundary.
//!
//! The storage layer has no advisory schema, so the only validation the
//! service performs happens here before any persistence call.

use crate::error::CoreError;

/// Reject a missing or whitespace-only required field.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reject a positive-integer field that is zero or negative.
pub fn require_positive(field: &'static str, value: i32) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_field_is_rejected() {
        let err = require_non_empty("title", "   ").unwrap_err();
        assert!(err.to_string().contains("title is required"));
    }

    #[test]
    fn present_field_passes() {
        assert!(require_non_empty("title", "Lakeview Towers").is_ok());
    }

    #[test]
    fn zero_and_negative_are_rejected() {
        assert!(require_positive("units", 0).is_err());
        assert!(require_positive("floors", -2).is_err());
        assert!(require_positive("units", 4).is_ok());
    }
}
