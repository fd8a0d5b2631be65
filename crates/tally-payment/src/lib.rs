//! Tally Payment
//!
//! Validated payment dispatch: an untyped request is checked against a
//! declared schema, its method is mapped to one of a fixed set of
//! interchangeable processors, and the selected processor executes the
//! validated amount.
//!
//! # Core Concepts
//!
//! - [`RawRequest`] / [`PaymentRequest`]: untyped input vs validated value
//! - [`ValidateRequest`]: validation contract; [`RequestSchema`] is the
//!   canonical implementation, reporting every violation at once
//! - [`Processor`]: strategy trait with [`PayPal`], [`Stripe`], [`Satispay`]
//! - [`ProcessorRegistry`]: immutable method-to-constructor mapping,
//!   exact-match dispatch
//! - [`PaymentPipeline`]: the staged flow, coverage-checked at construction
//!
//! # Example
//!
//! ```rust
//! use tally_payment::{PaymentPipeline, RawRequest};
//!
//! let pipeline = PaymentPipeline::with_defaults();
//! let confirmation = pipeline.process(&RawRequest::new("STRIPE", 9.90))?;
//!
//! assert!(confirmation.contains("Stripe"));
//! # Ok::<(), tally_payment::PaymentError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod pipeline;
mod processor;
mod registry;
mod request;
mod validate;

// Re-exports
pub use pipeline::{PaymentError, PaymentPipeline, Stage};
pub use processor::{ExecutionError, PayPal, Processor, Satispay, Stripe};
pub use registry::{DispatchError, ProcessorCtor, ProcessorRegistry, RegistryDrift};
pub use request::{normalize_method, PaymentRequest, RawRequest};
pub use validate::{RequestSchema, ValidateRequest, ValidationError, Violation};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
