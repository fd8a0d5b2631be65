//! Receipts and the Persistence Contract
//!
//! Checkout does not own a persistence engine. It records executed payments
//! through [`ReceiptStore`], a collaborator contract with exactly three
//! operations; storage backends live outside this workspace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique receipt identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub Ulid);

impl ReceiptId {
    /// Generate new receipt ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record of one executed payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique key
    pub id: ReceiptId,
    /// Normalized payment method
    pub method: String,
    /// Amount charged
    pub amount: Decimal,
    /// Confirmation string produced by the processor
    pub summary: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Receipt {
    /// Create a receipt for an executed payment
    #[must_use]
    pub fn new(method: impl Into<String>, amount: Decimal, summary: impl Into<String>) -> Self {
        Self {
            id: ReceiptId::new(),
            method: method.into(),
            amount,
            summary: summary.into(),
            created_at: Utc::now(),
        }
    }
}

/// Failure inside a receipt store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A receipt with this key already exists
    #[error("duplicate receipt key: {id}")]
    DuplicateKey {
        /// The key that collided
        id: ReceiptId,
    },

    /// The backend rejected the operation
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence collaborator contract
///
/// Session lifecycle, schemas, and relationship loading are the backend's
/// business; checkout sees only these three operations.
pub trait ReceiptStore: std::fmt::Debug {
    /// Persist a receipt, returning the stored value
    ///
    /// # Errors
    /// [`StoreError::DuplicateKey`] if the key is already taken, or a
    /// backend failure.
    fn create(&mut self, receipt: Receipt) -> Result<Receipt, StoreError>;

    /// All receipts, oldest first
    fn list(&self) -> Vec<Receipt>;

    /// Look up a receipt by key
    fn find_by_key(&self, key: &ReceiptId) -> Option<Receipt>;
}
