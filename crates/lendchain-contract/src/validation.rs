//! Shared precondition checks for contract arguments.

use crate::error::{ContractError, ContractResult};

/// Require a strictly positive amount or rate.
///
/// Rejects zero, negatives, and NaN alike.
pub fn require_positive(name: &str, value: f64) -> ContractResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ContractError::Validation(format!(
            "{name} must be positive"
        )))
    }
}

/// Require a strictly positive term in months.
pub fn require_positive_duration(months: u32) -> ContractResult<()> {
    if months > 0 {
        Ok(())
    } else {
        Err(ContractError::Validation(
            "loan duration must be positive".to_string(),
        ))
    }
}

/// Require a non-empty identifier.
pub fn require_identifier(name: &str, value: &str) -> ContractResult<()> {
    if value.is_empty() {
        Err(ContractError::Validation(format!(
            "{name} must not be empty"
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_check_rejects_zero_negative_and_nan() {
        assert!(require_positive("loan amount", 0.01).is_ok());
        for bad in [0.0, -5.0, f64::NAN] {
            let error = require_positive("loan amount", bad).unwrap_err();
            assert!(matches!(error, ContractError::Validation(_)));
        }
    }

    #[test]
    fn duration_check_rejects_zero() {
        assert!(require_positive_duration(1).is_ok());
        assert!(require_positive_duration(0).is_err());
    }

    #[test]
    fn identifier_check_rejects_empty() {
        assert!(require_identifier("borrower id", "B1").is_ok());
        assert!(require_identifier("borrower id", "").is_err());
    }
}
