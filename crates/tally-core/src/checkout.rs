//! Checkout Facade
//!
//! One surface over both components: order pricing through the modifier
//! chain and payment processing through the validated dispatch pipeline.
//! Construction runs the allow-list/registry coverage check, so a
//! `Checkout` that exists cannot drift at request time.

use crate::config::CheckoutConfig;
use crate::error::CheckoutError;
use crate::receipt::{Receipt, ReceiptStore};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_payment::{
    PaymentError, PaymentPipeline, ProcessorRegistry, RawRequest, RequestSchema, ValidateRequest,
};
use tally_pricing::{compose, BaseKind, Discount, ModifierKind, Priced};

/// Cost and label of a priced order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Cumulative cost
    pub cost: Decimal,
    /// Cumulative label, suffixes in application order
    pub label: String,
}

impl std::fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}\u{20ac})", self.label, self.cost)
    }
}

impl OrderSummary {
    fn of(item: &dyn Priced) -> Self {
        Self {
            cost: item.cost(),
            label: item.label(),
        }
    }
}

/// The checkout facade
///
/// Owns the request schema and processor registry, coverage-checked
/// against each other at construction.
#[derive(Debug)]
pub struct Checkout {
    config: CheckoutConfig,
    pipeline: PaymentPipeline,
}

impl Checkout {
    /// Create a checkout from configuration
    ///
    /// # Errors
    /// [`CheckoutError::Drift`] if the configured allow-list names a method
    /// the registry lacks; caught here so it never surfaces per-request.
    pub fn new(config: CheckoutConfig) -> Result<Self, CheckoutError> {
        let schema = RequestSchema::new(&config.allowed_methods);
        let registry = ProcessorRegistry::with_defaults();
        let pipeline = PaymentPipeline::new(schema, registry)?;

        tracing::debug!(
            methods = ?pipeline.validator().allowed_methods(),
            "checkout ready"
        );
        Ok(Self { config, pipeline })
    }

    /// Checkout over the built-in schema and registry
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            config: CheckoutConfig::default(),
            pipeline: PaymentPipeline::with_defaults(),
        }
    }

    /// Price an order: fold the modifiers over the base, in order
    #[must_use]
    pub fn price_order(&self, base: BaseKind, modifiers: &[ModifierKind]) -> OrderSummary {
        let item = compose(base.base().boxed(), modifiers);
        let summary = OrderSummary::of(item.as_ref());
        tracing::debug!(label = %summary.label, cost = %summary.cost, "order priced");
        summary
    }

    /// Price an order and apply a fixed discount on top
    ///
    /// # Errors
    /// [`CheckoutError::Pricing`] if the discount's preconditions fail; the
    /// whole build is discarded.
    pub fn price_discounted(
        &self,
        base: BaseKind,
        modifiers: &[ModifierKind],
        discount: Decimal,
    ) -> Result<OrderSummary, CheckoutError> {
        let item = compose(base.base().boxed(), modifiers);
        let discounted = Discount::apply(item, discount)?;
        Ok(OrderSummary::of(&discounted))
    }

    /// Process one payment request
    ///
    /// # Errors
    /// [`PaymentError`] naming the failed stage; terminal on first failure.
    pub fn process_payment(&self, method: &str, amount: f64) -> Result<String, PaymentError> {
        self.pipeline.process(&RawRequest::new(method, amount))
    }

    /// Process one payment request and persist a receipt
    ///
    /// The receipt is written only after execution; a failure at any
    /// earlier stage records nothing.
    ///
    /// # Errors
    /// [`CheckoutError`] from the pipeline or the store.
    pub fn process_and_record(
        &self,
        store: &mut dyn ReceiptStore,
        method: &str,
        amount: f64,
    ) -> Result<Receipt, CheckoutError> {
        let raw = RawRequest::new(method, amount);

        let request = self
            .pipeline
            .validator()
            .validate(&raw)
            .map_err(PaymentError::from)?;
        let processor = self
            .pipeline
            .registry()
            .dispatch(&request)
            .map_err(PaymentError::from)?;
        let summary = processor
            .execute(request.amount())
            .map_err(PaymentError::from)?;

        let receipt = store.create(Receipt::new(request.method(), request.amount(), summary))?;
        tracing::info!(id = %receipt.id, method = %receipt.method, "receipt recorded");
        Ok(receipt)
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn checkout_prices_the_classic_order() {
        let checkout = Checkout::with_defaults();
        let summary =
            checkout.price_order(BaseKind::SimpleCoffee, &[ModifierKind::Milk, ModifierKind::Sugar]);

        assert_eq!(summary.cost, dec!(2.80));
        assert_eq!(summary.label, "Simple Coffee, Milk, Sugar");
    }

    #[test]
    fn checkout_processes_a_payment() {
        let checkout = Checkout::with_defaults();
        let out = checkout.process_payment("PAYPAL", 42.5).unwrap();

        assert!(out.contains("PayPal"));
    }

    #[test]
    fn drifted_config_fails_construction() {
        let config = CheckoutConfig::new().with_method("bank-wire");
        assert!(Checkout::new(config).is_err());
    }

    #[test]
    fn discounted_order_subtracts() {
        let checkout = Checkout::with_defaults();
        let summary = checkout
            .price_discounted(BaseKind::SimpleCoffee, &[ModifierKind::Milk], dec!(0.50))
            .unwrap();

        assert_eq!(summary.cost, dec!(2.00));
        assert_eq!(summary.label, "Simple Coffee, Milk, Discount");
    }

    #[test]
    fn overdrawn_discount_is_a_pricing_error() {
        let checkout = Checkout::with_defaults();
        let err = checkout
            .price_discounted(BaseKind::SimpleCoffee, &[], dec!(99.00))
            .unwrap_err();

        assert!(matches!(err, CheckoutError::Pricing(_)));
        assert!(err.is_user_error());
    }

    #[test]
    fn order_summary_displays_label_and_cost() {
        let checkout = Checkout::with_defaults();
        let summary = checkout.price_order(BaseKind::Espresso, &[]);

        assert_eq!(summary.to_string(), "Espresso (2.50\u{20ac})");
    }
}
