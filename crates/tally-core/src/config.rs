//! Checkout configuration

use serde::{Deserialize, Serialize};
use tally_pricing::BaseKind;

/// Checkout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Payment methods the request schema accepts
    pub allowed_methods: Vec<String>,
    /// Base item used when the caller names none
    pub default_base: BaseKind,
}

impl CheckoutConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accepted payment methods
    #[inline]
    #[must_use]
    pub fn with_allowed_methods(
        mut self,
        methods: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.allowed_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Accept one more payment method
    #[inline]
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.allowed_methods.push(method.into());
        self
    }

    /// Replace the default base item
    #[inline]
    #[must_use]
    pub fn with_default_base(mut self, base: BaseKind) -> Self {
        self.default_base = base;
        self
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            allowed_methods: vec![
                "paypal".to_string(),
                "stripe".to_string(),
                "satispay".to_string(),
            ],
            default_base: BaseKind::SimpleCoffee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_builtin_methods() {
        let config = CheckoutConfig::new();
        assert_eq!(config.allowed_methods, vec!["paypal", "stripe", "satispay"]);
        assert_eq!(config.default_base, BaseKind::SimpleCoffee);
    }

    #[test]
    fn builder_methods_compose() {
        let config = CheckoutConfig::new()
            .with_allowed_methods(["paypal"])
            .with_method("stripe")
            .with_default_base(BaseKind::Espresso);

        assert_eq!(config.allowed_methods, vec!["paypal", "stripe"]);
        assert_eq!(config.default_base, BaseKind::Espresso);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = CheckoutConfig::new();
        let json = serde_json::to_string(&config).unwrap();
        let back: CheckoutConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.allowed_methods, config.allowed_methods);
    }
}
