//! Payment Processors
//!
//! The strategy seam of the dispatch pipeline: interchangeable
//! implementations selected by method name. Executing a processor produces
//! a result string and nothing else; the built-in processors format only,
//! but the contract is fallible so that downstream integrations can fail
//! without changing the seam.

use rust_decimal::Decimal;

/// Failure while executing a payment
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The provider refused the charge
    #[error("charge declined: {0}")]
    Declined(String),

    /// The provider could not be reached
    #[error("provider unreachable: {0}")]
    Unreachable(String),
}

/// Interchangeable payment strategy
pub trait Processor: Send + Sync + std::fmt::Debug {
    /// Display name of the provider
    fn name(&self) -> &'static str;

    /// Execute a payment for a validated amount
    ///
    /// # Errors
    /// [`ExecutionError`] if the provider refuses or cannot be reached.
    fn execute(&self, amount: Decimal) -> Result<String, ExecutionError>;
}

fn confirmation(name: &str, amount: Decimal) -> String {
    format!("Paid {amount}\u{20ac} using {name}.")
}

/// PayPal strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct PayPal;

impl Processor for PayPal {
    fn name(&self) -> &'static str {
        "PayPal"
    }

    fn execute(&self, amount: Decimal) -> Result<String, ExecutionError> {
        Ok(confirmation(self.name(), amount))
    }
}

/// Stripe strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Stripe;

impl Processor for Stripe {
    fn name(&self) -> &'static str {
        "Stripe"
    }

    fn execute(&self, amount: Decimal) -> Result<String, ExecutionError> {
        Ok(confirmation(self.name(), amount))
    }
}

/// Satispay strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Satispay;

impl Processor for Satispay {
    fn name(&self) -> &'static str {
        "Satispay"
    }

    fn execute(&self, amount: Decimal) -> Result<String, ExecutionError> {
        Ok(confirmation(self.name(), amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn paypal_confirmation_names_provider_and_amount() {
        let out = PayPal.execute(dec!(42.50)).unwrap();
        assert!(out.contains("42.5"));
        assert!(out.contains("PayPal"));
    }

    #[test]
    fn stripe_confirmation() {
        let out = Stripe.execute(dec!(10)).unwrap();
        assert_eq!(out, "Paid 10\u{20ac} using Stripe.");
    }

    #[test]
    fn satispay_confirmation() {
        let out = Satispay.execute(dec!(0.01)).unwrap();
        assert_eq!(out, "Paid 0.01\u{20ac} using Satispay.");
    }

    #[test]
    fn execution_is_pure_formatting() {
        assert_eq!(
            PayPal.execute(dec!(1.00)).unwrap(),
            PayPal.execute(dec!(1.00)).unwrap()
        );
    }
}
