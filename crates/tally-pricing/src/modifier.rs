//! Modifier Wrappers
//!
//! Each modifier exclusively owns exactly one inner item, established at
//! construction and never reassigned. A modifier adds a fixed surcharge to
//! the inner cost and appends a fixed suffix to the inner label.

use crate::item::Priced;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Delimiter between a label and each appended modifier suffix
pub const LABEL_DELIMITER: &str = ", ";

/// Steamed milk add-on
#[derive(Debug)]
pub struct Milk {
    inner: Box<dyn Priced>,
}

impl Milk {
    /// Wrap an item with milk
    #[inline]
    #[must_use]
    pub fn new(inner: Box<dyn Priced>) -> Self {
        Self { inner }
    }

    /// Fixed cost increment of this modifier
    #[inline]
    #[must_use]
    pub fn surcharge() -> Decimal {
        dec!(0.50)
    }
}

impl Priced for Milk {
    fn cost(&self) -> Decimal {
        self.inner.cost() + Self::surcharge()
    }

    fn label(&self) -> String {
        format!("{}{}Milk", self.inner.label(), LABEL_DELIMITER)
    }
}

/// Sugar add-on
#[derive(Debug)]
pub struct Sugar {
    inner: Box<dyn Priced>,
}

impl Sugar {
    /// Wrap an item with sugar
    #[inline]
    #[must_use]
    pub fn new(inner: Box<dyn Priced>) -> Self {
        Self { inner }
    }

    /// Fixed cost increment of this modifier
    #[inline]
    #[must_use]
    pub fn surcharge() -> Decimal {
        dec!(0.30)
    }
}

impl Priced for Sugar {
    fn cost(&self) -> Decimal {
        self.inner.cost() + Self::surcharge()
    }

    fn label(&self) -> String {
        format!("{}{}Sugar", self.inner.label(), LABEL_DELIMITER)
    }
}

/// Whipped cream add-on
#[derive(Debug)]
pub struct Whip {
    inner: Box<dyn Priced>,
}

impl Whip {
    /// Wrap an item with whipped cream
    #[inline]
    #[must_use]
    pub fn new(inner: Box<dyn Priced>) -> Self {
        Self { inner }
    }

    /// Fixed cost increment of this modifier
    #[inline]
    #[must_use]
    pub fn surcharge() -> Decimal {
        dec!(0.70)
    }
}

impl Priced for Whip {
    fn cost(&self) -> Decimal {
        self.inner.cost() + Self::surcharge()
    }

    fn label(&self) -> String {
        format!("{}{}Whip", self.inner.label(), LABEL_DELIMITER)
    }
}
