//! Processor Registry
//!
//! Immutable mapping from normalized method name to processor constructor.
//! The mapping is built once (at startup for the process-wide instance) and
//! never mutated afterwards; dispatch is exact-match only.

use crate::processor::{PayPal, Processor, Satispay, Stripe};
use crate::request::{normalize_method, PaymentRequest};
use crate::validate::ValidateRequest;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Zero-argument constructor of a processor
pub type ProcessorCtor = fn() -> Box<dyn Processor>;

/// Dispatch failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// No processor is registered under the request's method
    #[error("unknown payment method: {method}")]
    UnknownMethod {
        /// Normalized method that missed the registry
        method: String,
    },
}

/// Drift between a validation allow-list and the registry
///
/// A configuration defect, not a user error: requests for these methods
/// would pass validation and then fail dispatch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("methods allowed by validation but absent from the registry: [{}]", missing.join(", "))]
pub struct RegistryDrift {
    /// Allowed methods with no registered constructor
    pub missing: Vec<String>,
}

/// Registry of payment processors keyed by normalized method
#[derive(Debug, Clone, Default)]
pub struct ProcessorRegistry {
    entries: IndexMap<String, ProcessorCtor>,
}

static GLOBAL: Lazy<ProcessorRegistry> = Lazy::new(ProcessorRegistry::with_defaults);

impl ProcessorRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create registry with the built-in processors
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("paypal", || Box::new(PayPal));
        registry.register("stripe", || Box::new(Stripe));
        registry.register("satispay", || Box::new(Satispay));
        registry
    }

    /// Process-wide registry, initialized once and never mutated
    #[inline]
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Register a constructor under a method name (normalized)
    ///
    /// Build-time only: the registry is not meant to change once dispatch
    /// has started.
    pub fn register(&mut self, method: &str, ctor: ProcessorCtor) {
        self.entries.insert(normalize_method(method), ctor);
    }

    /// Check if a method has a registered constructor
    #[inline]
    #[must_use]
    pub fn contains(&self, method: &str) -> bool {
        self.entries.contains_key(&normalize_method(method))
    }

    /// Registered method names, in registration order
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Get number of registered processors
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a validated request's method, exact match only
    ///
    /// A miss here means the method passed validation without a registered
    /// constructor, which is registry drift; it is logged as such.
    ///
    /// # Errors
    /// [`DispatchError::UnknownMethod`] on a miss.
    pub fn dispatch(&self, request: &PaymentRequest) -> Result<Box<dyn Processor>, DispatchError> {
        match self.entries.get(request.method()) {
            Some(ctor) => Ok(ctor()),
            None => {
                tracing::error!(
                    method = request.method(),
                    "validated method has no registered processor"
                );
                Err(DispatchError::UnknownMethod {
                    method: request.method().to_string(),
                })
            }
        }
    }

    /// Verify that every method a validator accepts is registered
    ///
    /// Run at startup so drift between the allow-list and the registry
    /// fails fast instead of surfacing per-request.
    ///
    /// # Errors
    /// [`RegistryDrift`] listing every uncovered method.
    pub fn verify_covers(&self, validator: &dyn ValidateRequest) -> Result<(), RegistryDrift> {
        let missing: Vec<String> = validator
            .allowed_methods()
            .into_iter()
            .filter(|m| !self.entries.contains_key(m))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RegistryDrift { missing })
        }
    }
}
