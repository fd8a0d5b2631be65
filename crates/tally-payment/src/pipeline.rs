//! Dispatch Pipeline
//!
//! Drives one request through `Received -> Validated -> Dispatched ->
//! Executed`. The first failure is terminal: all prior work for the request
//! is discarded, nothing is retried, and no side effect happens before
//! `Executed`.

use crate::processor::ExecutionError;
use crate::registry::{DispatchError, ProcessorRegistry, RegistryDrift};
use crate::request::RawRequest;
use crate::validate::{RequestSchema, ValidateRequest, ValidationError};
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a payment request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Raw request received, nothing checked
    Received,
    /// Schema checks passed
    Validated,
    /// Processor selected
    Dispatched,
    /// Result produced
    Executed,
    /// Terminal failure at some earlier stage
    Failed,
}

impl Stage {
    /// Stages reachable from this one
    #[must_use]
    pub fn allowed_transitions(self) -> &'static [Stage] {
        match self {
            Stage::Received => &[Stage::Validated, Stage::Failed],
            Stage::Validated => &[Stage::Dispatched, Stage::Failed],
            Stage::Dispatched => &[Stage::Executed, Stage::Failed],
            Stage::Executed | Stage::Failed => &[],
        }
    }

    /// Check whether a transition is legal
    #[inline]
    #[must_use]
    pub fn can_transition_to(self, to: Stage) -> bool {
        self.allowed_transitions().contains(&to)
    }

    /// Check whether the stage ends the lifecycle
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

/// Failure of the dispatch pipeline
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    /// Request rejected by the schema
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No processor registered for the validated method
    #[error("dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),

    /// Selected processor failed to execute
    #[error("execution failed: {0}")]
    Execution(#[from] ExecutionError),
}

impl PaymentError {
    /// Stage the request had reached when it failed
    #[inline]
    #[must_use]
    pub fn failed_during(&self) -> Stage {
        match self {
            PaymentError::Validation(_) => Stage::Received,
            PaymentError::Dispatch(_) => Stage::Validated,
            PaymentError::Execution(_) => Stage::Dispatched,
        }
    }

    /// Check if the failure is a user-input defect
    ///
    /// Dispatch misses are excluded: the method already passed validation,
    /// so a miss indicates allow-list/registry drift.
    #[inline]
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, PaymentError::Validation(_))
    }
}

/// Validation plus registry dispatch as one pipeline
///
/// Construction runs the coverage check, so a pipeline that exists is
/// internally consistent: every method its validator accepts dispatches.
#[derive(Debug)]
pub struct PaymentPipeline<V = RequestSchema>
where
    V: ValidateRequest,
{
    validator: V,
    registry: ProcessorRegistry,
}

impl<V: ValidateRequest> PaymentPipeline<V> {
    /// Create a pipeline, failing fast on allow-list/registry drift
    ///
    /// # Errors
    /// [`RegistryDrift`] naming every validated method the registry lacks.
    pub fn new(validator: V, registry: ProcessorRegistry) -> Result<Self, RegistryDrift> {
        registry.verify_covers(&validator)?;
        Ok(Self {
            validator,
            registry,
        })
    }

    /// Process one raw request to completion
    ///
    /// # Errors
    /// [`PaymentError`] naming the failed stage's cause; the request is
    /// discarded at the first failure.
    pub fn process(&self, raw: &RawRequest) -> Result<String, PaymentError> {
        tracing::info!(method = %raw.method, "payment request received");

        let request = self.validator.validate(raw)?;
        tracing::debug!(method = request.method(), "request validated");

        let processor = self.registry.dispatch(&request)?;
        tracing::debug!(processor = processor.name(), "processor dispatched");

        let result = processor.execute(request.amount())?;
        tracing::info!(processor = processor.name(), "payment executed");

        Ok(result)
    }

    /// The validator this pipeline was built with
    #[inline]
    #[must_use]
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// The registry this pipeline was built with
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ProcessorRegistry {
        &self.registry
    }
}

impl PaymentPipeline<RequestSchema> {
    /// Pipeline over the built-in schema and registry
    ///
    /// The defaults are mutually consistent, so construction cannot drift.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            validator: RequestSchema::with_defaults(),
            registry: ProcessorRegistry::with_defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn received_advances_to_validated_or_fails() {
        assert!(Stage::Received.can_transition_to(Stage::Validated));
        assert!(Stage::Received.can_transition_to(Stage::Failed));
        assert!(!Stage::Received.can_transition_to(Stage::Dispatched));
        assert!(!Stage::Received.can_transition_to(Stage::Executed));
    }

    #[test]
    fn stages_never_skip_forward() {
        assert!(!Stage::Validated.can_transition_to(Stage::Executed));
        assert!(!Stage::Received.can_transition_to(Stage::Executed));
    }

    #[test]
    fn executed_and_failed_are_terminal() {
        assert!(Stage::Executed.is_terminal());
        assert!(Stage::Failed.is_terminal());
        assert!(!Stage::Validated.is_terminal());
    }

    #[test]
    fn pipeline_defaults_process_a_request() {
        let pipeline = PaymentPipeline::with_defaults();
        let out = pipeline.process(&RawRequest::new("PayPal", 42.5)).unwrap();

        assert!(out.contains("42.5"));
        assert!(out.contains("PayPal"));
    }

    #[test]
    fn validation_failure_is_terminal_at_received() {
        let pipeline = PaymentPipeline::with_defaults();
        let err = pipeline
            .process(&RawRequest::new("bitcoin", 10.0))
            .unwrap_err();

        assert_eq!(err.failed_during(), Stage::Received);
        assert!(err.is_user_error());
    }

    #[test]
    fn drifted_pipeline_fails_to_construct() {
        let schema = RequestSchema::new(["paypal", "bank-wire"]);
        let result = PaymentPipeline::new(schema, ProcessorRegistry::with_defaults());

        assert!(result.is_err());
    }

    #[test]
    fn consistent_pipeline_constructs() {
        let schema = RequestSchema::new(["paypal"]);
        let result = PaymentPipeline::new(schema, ProcessorRegistry::with_defaults());

        assert!(result.is_ok());
    }
}
