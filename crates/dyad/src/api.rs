//! High-level API for dyadic computation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder pattern for selecting an operation and a
//! validation policy, producing a reusable model for scalar and elementwise
//! application.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration errors are surfaced when `.build()` is called.
//! * **Type-Safe**: Model methods are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Dyad::new()` → setters → `.build()` → model.
//! * **Duplicate Detection**: Setting the same parameter twice is an error.
//! * **Two tiers**: `apply` (validated slice path) and `apply_scalar`
//!   (bare scalar path, never fails).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{PairwiseConfig, PairwiseExecutor};

// Publicly re-exported types
pub use crate::engine::output::PairwiseResult;
pub use crate::math::ops::{BinaryOp, minus, product, rms, sum};
pub use crate::primitives::errors::DyadError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring dyadic computation.
///
/// Exported from the prelude as `Dyad`:
///
/// ```rust
/// use dyad::prelude::*;
///
/// let model = Dyad::new().operation(Rms).build()?;
/// let result = model.apply(&[3.0], &[4.0])?;
/// assert_eq!(result.len(), 1);
/// # Result::<(), DyadError>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DyadBuilder {
    /// Operation applied to each element pair.
    pub operation: Option<BinaryOp>,

    /// Reject non-finite input elements before execution.
    pub strict: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl DyadBuilder {
    /// Create a new builder with no parameters set.
    ///
    /// Unset parameters fall back to their defaults at `build()`:
    /// operation `Sum`, strict mode off.
    pub fn new() -> Self {
        Self {
            operation: None,
            strict: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Configuration Methods
    // ========================================================================

    /// Select the operation applied to each element pair.
    pub fn operation(mut self, operation: BinaryOp) -> Self {
        if self.operation.is_some() && self.duplicate_param.is_none() {
            self.duplicate_param = Some("operation");
        }
        self.operation = Some(operation);
        self
    }

    /// Reject NaN and infinite input elements before execution.
    ///
    /// Without this, non-finite elements flow through the elementwise path
    /// with standard floating-point semantics, exactly as they do through
    /// the scalar functions.
    pub fn strict(mut self) -> Self {
        if self.strict.is_some() && self.duplicate_param.is_none() {
            self.duplicate_param = Some("strict");
        }
        self.strict = Some(true);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Finalize the configuration into a reusable model.
    ///
    /// Surfaces `DuplicateParameter` if any setter was called twice, then
    /// materializes defaults for unset parameters.
    pub fn build(self) -> Result<DyadModel, DyadError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(DyadError::DuplicateParameter { parameter });
        }

        let config = PairwiseConfig {
            operation: self.operation.unwrap_or_default(),
            strict: self.strict.unwrap_or(false),
        };

        Ok(DyadModel {
            executor: PairwiseExecutor::new(config),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Configured, reusable dyadic computation model.
#[derive(Debug, Clone, Copy)]
pub struct DyadModel {
    executor: PairwiseExecutor,
}

impl DyadModel {
    /// Apply the configured operation elementwise across paired slices.
    pub fn apply<T: Float>(&self, x: &[T], y: &[T]) -> Result<PairwiseResult<T>, DyadError> {
        self.executor.run(x, y)
    }

    /// Apply the configured operation to a single pair of values.
    ///
    /// Scalar-tier semantics: no validation, no failure, non-finite inputs
    /// propagate.
    pub fn apply_scalar<T: Float>(&self, a: T, b: T) -> T {
        self.executor.config.operation.apply(a, b)
    }

    /// The operation this model applies.
    pub fn operation(&self) -> BinaryOp {
        self.executor.config.operation
    }

    /// Whether strict finite validation is enabled.
    pub fn is_strict(&self) -> bool {
        self.executor.config.strict
    }
}
