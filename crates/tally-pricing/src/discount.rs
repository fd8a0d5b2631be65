//! Discount Modifier
//!
//! The one modifier with preconditions: it refuses to wrap an unlabeled
//! item and refuses to discount an item below zero. A violated
//! precondition aborts construction of this chain with an error value; it
//! is never reported by panicking.

use crate::item::Priced;
use crate::modifier::LABEL_DELIMITER;
use rust_decimal::Decimal;

/// Failure to construct a modifier whose preconditions do not hold
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// The inner item carries no label to discount against
    #[error("discount requires a labeled item")]
    UnlabeledItem,

    /// The discount is larger than the item's current cost
    #[error("discount {discount} exceeds item cost {cost}")]
    DiscountExceedsCost {
        /// Cost of the item being wrapped
        cost: Decimal,
        /// Requested discount amount
        discount: Decimal,
    },
}

/// Fixed-amount discount applied on top of a priced item
#[derive(Debug)]
pub struct Discount {
    inner: Box<dyn Priced>,
    amount: Decimal,
}

impl Discount {
    /// Wrap an item with a fixed discount
    ///
    /// # Errors
    /// - [`ConstructionError::UnlabeledItem`] if the inner label is empty
    /// - [`ConstructionError::DiscountExceedsCost`] if the discount is
    ///   larger than the inner cost
    pub fn apply(inner: Box<dyn Priced>, amount: Decimal) -> Result<Self, ConstructionError> {
        if inner.label().is_empty() {
            return Err(ConstructionError::UnlabeledItem);
        }
        let cost = inner.cost();
        if amount > cost {
            return Err(ConstructionError::DiscountExceedsCost {
                cost,
                discount: amount,
            });
        }
        Ok(Self { inner, amount })
    }
}

impl Priced for Discount {
    fn cost(&self) -> Decimal {
        self.inner.cost() - self.amount
    }

    fn label(&self) -> String {
        format!("{}{}Discount", self.inner.label(), LABEL_DELIMITER)
    }
}
