//! Form validation, applied before any network call.
//!
//! Validation failures are handled locally by the caller and block
//! submission; they never reach the backend.

use crate::error::{GrangeError, Result};

/// Rejects empty or whitespace-only required fields.
pub fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GrangeError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Rejects non-positive integer quantities.
pub fn require_positive_quantity(field: &str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(GrangeError::validation(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(())
}

/// Rejects non-positive or non-finite amounts (prices, yields, expenses).
pub fn require_positive_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GrangeError::validation(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty_accepts_text() {
        assert!(require_non_empty("crop name", "Maize").is_ok());
    }

    #[test]
    fn test_require_non_empty_rejects_blank() {
        let err = require_non_empty("crop name", "   ").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("crop name"));
    }

    #[test]
    fn test_require_positive_quantity() {
        assert!(require_positive_quantity("quantity", 3).is_ok());
        assert!(require_positive_quantity("quantity", 0).unwrap_err().is_validation());
        assert!(require_positive_quantity("quantity", -2).unwrap_err().is_validation());
    }

    #[test]
    fn test_require_positive_amount_rejects_nan_and_zero() {
        assert!(require_positive_amount("unit price", 9.5).is_ok());
        assert!(require_positive_amount("unit price", 0.0).unwrap_err().is_validation());
        assert!(require_positive_amount("unit price", f64::NAN).unwrap_err().is_validation());
    }
}
