use bigdecimal::BigDecimal;
use std::fmt;
use std::str::FromStr;

use crate::domain::TransactionStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

pub fn validate_required(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }

    Ok(())
}

pub fn validate_positive_amount(amount: &BigDecimal) -> ValidationResult {
    if amount <= &BigDecimal::from(0) {
        return Err(ValidationError::new("amount", "must be greater than 0"));
    }

    Ok(())
}

/// A payment confirmation may only settle a transaction, so the supplied
/// status description must name a terminal status.
pub fn validate_terminal_status(field: &'static str, value: &str) -> Result<TransactionStatus, ValidationError> {
    let status = TransactionStatus::from_str(value)
        .map_err(|_| ValidationError::new(field, "must be one of: SUCCESS, FAILED"))?;

    if !status.is_terminal() {
        return Err(ValidationError::new(field, "must be one of: SUCCESS, FAILED"));
    }

    Ok(status)
}
