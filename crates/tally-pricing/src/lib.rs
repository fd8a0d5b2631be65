//! Tally Pricing
//!
//! Composable order pricing: a base item wrapped by an ordered chain of
//! modifiers, each contributing a fixed surcharge to the cumulative cost
//! and a fixed suffix to the cumulative label.
//!
//! # Core Concepts
//!
//! - [`Priced`]: capability trait exposed by every item (`cost()`, `label()`)
//! - [`Base`]: innermost item, wraps nothing
//! - [`Milk`] / [`Sugar`] / [`Whip`]: catalog modifiers, each owning exactly
//!   one inner item
//! - [`compose`]: left-to-right fold of an ordered modifier sequence
//! - [`Discount`]: a modifier with preconditions, the only fallible
//!   construction path
//!
//! # Example
//!
//! ```rust
//! use tally_pricing::{compose, BaseKind, ModifierKind};
//!
//! let item = compose(
//!     BaseKind::SimpleCoffee.base().boxed(),
//!     &[ModifierKind::Milk, ModifierKind::Sugar],
//! );
//!
//! assert_eq!(item.label(), "Simple Coffee, Milk, Sugar");
//! ```
//!
//! New pricing rules are added as new wrapper types implementing [`Priced`];
//! existing items and [`compose`] stay untouched.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod chain;
mod discount;
mod item;
mod modifier;

// Re-exports
pub use chain::{compose, compose_with, ModifierCtor, ModifierKind};
pub use discount::{ConstructionError, Discount};
pub use item::{Base, BaseKind, Priced};
pub use modifier::{Milk, Sugar, Whip, LABEL_DELIMITER};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn catalog_chain_end_to_end() {
        let item = compose(
            BaseKind::SimpleCoffee.base().boxed(),
            &[ModifierKind::Milk, ModifierKind::Sugar],
        );

        assert_eq!(item.cost(), dec!(2.80));
        assert_eq!(item.label(), "Simple Coffee, Milk, Sugar");
    }

    #[test]
    fn discount_over_composed_chain() {
        let chain = compose(
            BaseKind::Espresso.base().boxed(),
            &[ModifierKind::Whip],
        );
        let item = Discount::apply(chain, dec!(0.20)).unwrap();

        assert_eq!(item.cost(), dec!(3.00));
        assert_eq!(item.label(), "Espresso, Whip, Discount");
    }

    #[test]
    fn failed_discount_discards_the_build() {
        let chain = compose(Base::new(dec!(1.00), "Tea").boxed(), &[]);
        assert!(Discount::apply(chain, dec!(9.00)).is_err());
    }
}
