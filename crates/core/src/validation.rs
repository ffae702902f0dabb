//! Field-level checks applied to request inputs before they reach storage.

use rust_decimal::Decimal;

use crate::error::{CoreError, Result};

/// Reject empty or whitespace-only text.
pub fn require_non_empty(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidInput(message.to_owned()));
    }
    Ok(())
}

/// Reject negative amounts. Zero is allowed.
pub fn require_non_negative(value: Decimal, message: &str) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(CoreError::InvalidInput(message.to_owned()));
    }
    Ok(())
}
