//! Tally Core - Checkout Facade
//!
//! Ties the two components together behind one surface:
//! - prices orders through the modifier chain
//! - processes payments through the validated dispatch pipeline
//! - records executed payments through the persistence collaborator
//!
//! # Example
//!
//! ```rust
//! use tally_core::{Checkout, CheckoutConfig};
//! use tally_pricing::{BaseKind, ModifierKind};
//!
//! # fn example() -> Result<(), tally_core::CheckoutError> {
//! let checkout = Checkout::new(CheckoutConfig::new())?;
//!
//! let order = checkout.price_order(BaseKind::SimpleCoffee, &[ModifierKind::Milk]);
//! let confirmation = checkout.process_payment("paypal", 2.50)?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod checkout;
pub mod config;
pub mod error;
pub mod receipt;

// Re-exports for convenience
pub use checkout::{Checkout, OrderSummary};
pub use config::CheckoutConfig;
pub use error::CheckoutError;
pub use receipt::{Receipt, ReceiptId, ReceiptStore, StoreError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Tally Core
    pub use crate::{Checkout, CheckoutConfig, CheckoutError, OrderSummary, Receipt, ReceiptStore};
    pub use tally_payment::{PaymentError, RawRequest};
    pub use tally_pricing::{BaseKind, ModifierKind};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
