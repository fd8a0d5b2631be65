//! Priced Item Trait
//!
//! Defines the capability shared by every sellable item: a cumulative cost
//! and a cumulative label. Base items implement it directly; modifiers
//! implement it by delegating to the item they wrap.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Capability exposed by every item in a pricing chain
///
/// # Contract
/// - `cost()` and `label()` must be pure: repeated calls on the same item
///   return identical values
/// - implementations never mutate shared state
///
/// Modifiers must derive both values exclusively from the item they wrap
/// plus a fixed per-modifier increment/suffix.
pub trait Priced: Send + Sync + std::fmt::Debug {
    /// Cumulative cost of the item including every applied modifier
    fn cost(&self) -> Decimal;

    /// Cumulative label of the item, suffixes in application order
    fn label(&self) -> String;
}

/// Innermost item of a chain, wraps nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    cost: Decimal,
    label: String,
}

impl Base {
    /// Create a base item with an arbitrary cost and label
    #[inline]
    #[must_use]
    pub fn new(cost: Decimal, label: impl Into<String>) -> Self {
        Self {
            cost,
            label: label.into(),
        }
    }

    /// Box the base for use at the head of a chain
    #[inline]
    #[must_use]
    pub fn boxed(self) -> Box<dyn Priced> {
        Box::new(self)
    }
}

impl Priced for Base {
    #[inline]
    fn cost(&self) -> Decimal {
        self.cost
    }

    #[inline]
    fn label(&self) -> String {
        self.label.clone()
    }
}

/// Catalog of known base items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseKind {
    /// Plain brewed coffee
    SimpleCoffee,
    /// Double-shot espresso
    Espresso,
}

impl BaseKind {
    /// Instantiate the catalog entry
    #[must_use]
    pub fn base(&self) -> Base {
        match self {
            BaseKind::SimpleCoffee => Base::new(dec!(2.00), "Simple Coffee"),
            BaseKind::Espresso => Base::new(dec!(2.50), "Espresso"),
        }
    }

    /// Stable name for CLI/config lookup
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            BaseKind::SimpleCoffee => "simple-coffee",
            BaseKind::Espresso => "espresso",
        }
    }

    /// Resolve a catalog entry from its stable name
    #[inline]
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "simple-coffee" => Some(BaseKind::SimpleCoffee),
            "espresso" => Some(BaseKind::Espresso),
            _ => None,
        }
    }
}

impl std::fmt::Display for BaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
