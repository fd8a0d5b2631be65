//! Error types for Tally Core
//!
//! Aggregates the component errors behind one facade-level type:
//! - pricing construction failures
//! - payment pipeline failures (validation, dispatch, execution)
//! - allow-list/registry drift caught at startup
//! - receipt store failures

use crate::receipt::StoreError;
use tally_payment::{PaymentError, RegistryDrift};
use tally_pricing::ConstructionError;

/// Main checkout error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckoutError {
    /// A modifier's construction precondition failed
    #[error("pricing failed: {0}")]
    Pricing(#[from] ConstructionError),

    /// The payment pipeline rejected or failed the request
    #[error("payment failed: {0}")]
    Payment(#[from] PaymentError),

    /// The configured allow-list and the registry disagree
    #[error("configuration defect: {0}")]
    Drift(#[from] RegistryDrift),

    /// The receipt store rejected the record
    #[error("receipt store failed: {0}")]
    Store(#[from] StoreError),
}

impl CheckoutError {
    /// Check if the failure is a user-input defect
    ///
    /// Everything else (drift, store failures, execution failures) is an
    /// operator concern.
    #[inline]
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        match self {
            CheckoutError::Payment(e) => e.is_user_error(),
            CheckoutError::Pricing(_) => true,
            CheckoutError::Drift(_) | CheckoutError::Store(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_payment::{DispatchError, ValidationError, Violation};

    #[test]
    fn validation_failures_are_user_errors() {
        let err = CheckoutError::Payment(PaymentError::Validation(ValidationError {
            violations: vec![Violation::new("method", "unsupported")],
        }));

        assert!(err.is_user_error());
    }

    #[test]
    fn dispatch_misses_are_operator_errors() {
        let err = CheckoutError::Payment(PaymentError::Dispatch(DispatchError::UnknownMethod {
            method: "bank-wire".to_string(),
        }));

        assert!(!err.is_user_error());
    }

    #[test]
    fn drift_is_an_operator_error() {
        let err = CheckoutError::Drift(RegistryDrift {
            missing: vec!["bank-wire".to_string()],
        });

        assert!(!err.is_user_error());
        assert!(err.to_string().contains("configuration defect"));
    }
}
