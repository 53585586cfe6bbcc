//! Input validation for elementwise dyadic computation.
//!
//! ## Purpose
//!
//! This module provides validation functions for paired input slices. It
//! checks structural requirements (non-empty, matching lengths) and, on the
//! strict path, element finiteness.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Structural checks**: Always required by the elementwise engine.
//! * **Finite checks**: Opt-in; the default path lets NaN/infinity propagate.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * Finite checks report the offending slice, index, and value.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not validate scalar-function inputs (those are
//!   contractually unvalidated).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DyadError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for paired input slices.
///
/// Provides static methods for validating elementwise inputs. All methods
/// return `Result<(), DyadError>` and fail fast upon identifying the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Structural Validation
    // ========================================================================

    /// Validate input slices for elementwise application.
    pub fn validate_pairs<T: Float>(x: &[T], y: &[T]) -> Result<(), DyadError> {
        // Check 1: Non-empty slices
        if x.is_empty() || y.is_empty() {
            return Err(DyadError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(DyadError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        Ok(())
    }

    // ========================================================================
    // Finite Validation (strict mode)
    // ========================================================================

    /// Validate that every element of both slices is finite.
    ///
    /// Both slices are walked in one loop for cache locality; `x[i]` is
    /// reported before `y[i]` when both are non-finite.
    pub fn validate_finite<T: Float>(x: &[T], y: &[T]) -> Result<(), DyadError> {
        let n = x.len().min(y.len());
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(DyadError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(DyadError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), DyadError> {
        if !val.is_finite() {
            return Err(DyadError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }
}
