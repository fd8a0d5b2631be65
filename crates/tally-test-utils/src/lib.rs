//! Testing utilities for the Tally workspace
//!
//! Shared test doubles and fixtures.

#![allow(missing_docs)]

use rust_decimal::Decimal;
use tally_core::{Checkout, Receipt, ReceiptId, ReceiptStore, StoreError};
use tally_payment::{ExecutionError, Processor, ProcessorRegistry, RawRequest};
use tally_pricing::{compose, BaseKind, ModifierKind, Priced};

/// In-memory receipt store double with unique-key enforcement
#[derive(Debug, Default)]
pub struct MemoryReceiptStore {
    receipts: Vec<Receipt>,
}

impl MemoryReceiptStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }
}

impl ReceiptStore for MemoryReceiptStore {
    fn create(&mut self, receipt: Receipt) -> Result<Receipt, StoreError> {
        if self.receipts.iter().any(|r| r.id == receipt.id) {
            return Err(StoreError::DuplicateKey { id: receipt.id });
        }
        self.receipts.push(receipt.clone());
        Ok(receipt)
    }

    fn list(&self) -> Vec<Receipt> {
        self.receipts.clone()
    }

    fn find_by_key(&self, key: &ReceiptId) -> Option<Receipt> {
        self.receipts.iter().find(|r| r.id == *key).cloned()
    }
}

/// Processor double that always declines, for exercising execution failures
#[derive(Debug, Clone, Copy, Default)]
pub struct DecliningProcessor;

impl Processor for DecliningProcessor {
    fn name(&self) -> &'static str {
        "Declining"
    }

    fn execute(&self, _amount: Decimal) -> Result<String, ExecutionError> {
        Err(ExecutionError::Declined("insufficient funds".to_string()))
    }
}

/// Registry whose only method always declines
#[must_use]
pub fn declining_registry(method: &str) -> ProcessorRegistry {
    let mut registry = ProcessorRegistry::new();
    registry.register(method, || Box::new(DecliningProcessor));
    registry
}

pub fn raw_request(method: &str, amount: f64) -> RawRequest {
    RawRequest::new(method, amount)
}

/// The classic milk-and-sugar chain over the catalog base
#[must_use]
pub fn milk_sugar_coffee() -> Box<dyn Priced> {
    compose(
        BaseKind::SimpleCoffee.base().boxed(),
        &[ModifierKind::Milk, ModifierKind::Sugar],
    )
}

pub fn setup_test_checkout() -> Checkout {
    Checkout::with_defaults()
}
