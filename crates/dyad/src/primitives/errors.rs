//! Error types for dyadic operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur on the slice and
//! builder surfaces of the crate: structural input misuse, opt-in strict
//! validation failures, and builder misconfiguration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual lengths).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty slices, mismatched lengths, non-finite values.
//! 2. **Builder constraints**: Parameters set more than once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * The scalar operations never construct these errors.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for dyadic slice and builder operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DyadError {
    /// An input slice is empty; elementwise application requires data.
    EmptyInput,

    /// `x` and `y` slices must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` slice.
        x_len: usize,
        /// Number of elements in the `y` slice.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values (strict mode only).
    InvalidNumericValue(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DyadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input slices are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} elements, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for DyadError {}
