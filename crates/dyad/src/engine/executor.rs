//! Elementwise execution engine for dyadic operations.
//!
//! ## Purpose
//!
//! This module applies one `BinaryOp` across two paired input slices,
//! producing a `PairwiseResult`. It owns the validate-execute-assemble
//! pipeline of the slice path.
//!
//! ## Design notes
//!
//! * **Delegation**: Scalar semantics are delegated to the math layer.
//! * **Validation**: Structural checks always run; finite checks only in
//!   strict mode.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Configuration**: `PairwiseConfig` selects the operation and strictness.
//! * **Order preservation**: Output index `i` corresponds to input index `i`.
//!
//! ## Invariants
//!
//! * The computed column has exactly the input length.
//! * In non-strict mode, non-finite elements propagate untouched.
//!
//! ## Non-goals
//!
//! * This module does not sort, chunk, or stream input data.
//! * This module does not parallelize execution.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::PairwiseResult;
use crate::engine::validator::Validator;
use crate::math::ops::BinaryOp;
use crate::primitives::errors::DyadError;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for elementwise dyadic execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairwiseConfig {
    /// Operation applied to each element pair.
    pub operation: BinaryOp,

    /// Reject non-finite input elements before execution.
    pub strict: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Executor applying a configured operation across paired slices.
#[derive(Debug, Clone, Copy)]
pub struct PairwiseExecutor {
    /// Execution configuration.
    pub config: PairwiseConfig,
}

impl PairwiseExecutor {
    /// Create a new executor from a configuration.
    pub fn new(config: PairwiseConfig) -> Self {
        Self { config }
    }

    /// Apply the configured operation elementwise.
    ///
    /// Validates inputs per the configuration, computes
    /// `values[i] = op(x[i], y[i])` for every index, and assembles the
    /// result record.
    pub fn run<T: Float>(&self, x: &[T], y: &[T]) -> Result<PairwiseResult<T>, DyadError> {
        Validator::validate_pairs(x, y)?;
        if self.config.strict {
            Validator::validate_finite(x, y)?;
        }

        let op = self.config.operation;
        let values: Vec<T> = x
            .iter()
            .zip(y.iter())
            .map(|(&a, &b)| op.apply(a, b))
            .collect();

        Ok(PairwiseResult {
            x: x.to_vec(),
            y: y.to_vec(),
            values,
            operation: op,
        })
    }
}
