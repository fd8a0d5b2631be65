//! Request Validation
//!
//! Checks an untyped [`RawRequest`] against a declared schema and reports
//! every violated constraint at once, each naming the offending field and
//! the expected constraint. Callers present the full list to the end user;
//! first-error-only reporting is deliberately avoided.

use crate::request::{normalize_method, PaymentRequest, RawRequest};
use indexmap::IndexSet;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Field the constraint applies to
    pub field: String,
    /// Constraint the value failed to meet
    pub constraint: String,
}

impl Violation {
    /// Create a violation record
    #[inline]
    #[must_use]
    pub fn new(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

/// Validation failure carrying every violated constraint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request validation failed: {}", summarize(.violations))]
pub struct ValidationError {
    /// All violations found, in field order
    pub violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validation contract supplied by the caller of the dispatch pipeline
pub trait ValidateRequest: Send + Sync + std::fmt::Debug {
    /// Validate a raw request, reporting every violated constraint
    ///
    /// # Errors
    /// [`ValidationError`] listing all violations, not just the first.
    fn validate(&self, raw: &RawRequest) -> Result<PaymentRequest, ValidationError>;

    /// Methods this validator accepts, normalized
    ///
    /// Used by the registry coverage check at startup.
    fn allowed_methods(&self) -> Vec<String>;
}

/// Schema for payment requests: a method allow-list and amount bounds
#[derive(Debug, Clone)]
pub struct RequestSchema {
    allowed_methods: IndexSet<String>,
}

impl RequestSchema {
    /// Schema accepting the given methods (normalized on insertion)
    #[must_use]
    pub fn new(methods: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self {
            allowed_methods: methods
                .into_iter()
                .map(|m| normalize_method(m.as_ref()))
                .collect(),
        }
    }

    /// Schema accepting the built-in methods: paypal, stripe, satispay
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(["paypal", "stripe", "satispay"])
    }

    /// Check membership of a normalized method
    #[inline]
    #[must_use]
    pub fn allows(&self, method: &str) -> bool {
        self.allowed_methods.contains(method)
    }

    fn allowed_list(&self) -> String {
        self.allowed_methods
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl ValidateRequest for RequestSchema {
    fn validate(&self, raw: &RawRequest) -> Result<PaymentRequest, ValidationError> {
        let mut violations = Vec::new();

        let method = normalize_method(&raw.method);
        if !self.allows(&method) {
            violations.push(Violation::new(
                "method",
                format!(
                    "unsupported method '{}', must be one of [{}]",
                    raw.method,
                    self.allowed_list()
                ),
            ));
        }

        let amount = match Decimal::from_f64(raw.amount) {
            Some(a) if a > Decimal::ZERO => Some(a),
            Some(_) => {
                violations.push(Violation::new(
                    "amount",
                    "must be strictly greater than zero",
                ));
                None
            }
            None => {
                violations.push(Violation::new("amount", "must be a finite number"));
                None
            }
        };

        match (amount, violations.is_empty()) {
            (Some(a), true) => Ok(PaymentRequest::new(method, a)),
            _ => Err(ValidationError { violations }),
        }
    }

    fn allowed_methods(&self) -> Vec<String> {
        self.allowed_methods.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn schema() -> RequestSchema {
        RequestSchema::with_defaults()
    }

    #[test]
    fn mixed_case_method_normalizes_and_passes() {
        let req = schema()
            .validate(&RawRequest::new("STRIPE", 10.0))
            .unwrap();

        assert_eq!(req.method(), "stripe");
        assert_eq!(req.amount(), dec!(10));
    }

    #[test]
    fn unsupported_method_is_a_single_violation() {
        let err = schema()
            .validate(&RawRequest::new("bitcoin", 10.0))
            .unwrap_err();

        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "method");
        assert!(err.violations[0].constraint.contains("paypal"));
        assert!(err.violations[0].constraint.contains("stripe"));
        assert!(err.violations[0].constraint.contains("satispay"));
    }

    #[test]
    fn zero_amount_fails_on_amount_field() {
        let err = schema()
            .validate(&RawRequest::new("paypal", 0.0))
            .unwrap_err();

        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "amount");
    }

    #[test]
    fn negative_amount_fails_on_amount_field() {
        let err = schema()
            .validate(&RawRequest::new("paypal", -5.0))
            .unwrap_err();

        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "amount");
    }

    #[test]
    fn one_cent_passes() {
        let req = schema()
            .validate(&RawRequest::new("paypal", 0.01))
            .unwrap();

        assert_eq!(req.amount(), dec!(0.01));
    }

    #[test]
    fn non_finite_amount_fails() {
        let err = schema()
            .validate(&RawRequest::new("paypal", f64::NAN))
            .unwrap_err();

        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].constraint, "must be a finite number");
    }

    #[test]
    fn all_violations_are_reported_together() {
        let err = schema()
            .validate(&RawRequest::new("bitcoin", -1.0))
            .unwrap_err();

        let fields: Vec<&str> = err.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["method", "amount"]);
    }

    #[test]
    fn error_message_lists_every_violation() {
        let err = schema()
            .validate(&RawRequest::new("bitcoin", 0.0))
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("method:"));
        assert!(message.contains("amount:"));
    }
}
