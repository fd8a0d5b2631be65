//! Payment Request Values
//!
//! [`RawRequest`] is the untyped input exactly as the caller supplied it.
//! [`PaymentRequest`] only exists after schema validation: its method is
//! normalized and its amount is a strictly positive decimal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unvalidated payment request
///
/// Carries whatever the caller sent. Nothing is trusted until it passes
/// through a [`crate::ValidateRequest`] implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRequest {
    /// Requested payment method, any casing
    pub method: String,
    /// Requested amount, unchecked
    pub amount: f64,
}

impl RawRequest {
    /// Create a raw request
    #[inline]
    #[must_use]
    pub fn new(method: impl Into<String>, amount: f64) -> Self {
        Self {
            method: method.into(),
            amount,
        }
    }
}

/// Validated, immutable payment request
///
/// Constructed only by validation. The method is lowercased and a member of
/// the schema's allowed set; the amount is finite and strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    method: String,
    amount: Decimal,
}

impl PaymentRequest {
    pub(crate) fn new(method: String, amount: Decimal) -> Self {
        Self { method, amount }
    }

    /// Normalized payment method
    #[inline]
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Validated amount
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Lowercase a method name for schema and registry lookup
#[inline]
#[must_use]
pub fn normalize_method(method: &str) -> String {
    method.trim().to_ascii_lowercase()
}
