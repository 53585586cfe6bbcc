//! Output types and result structures for dyadic operations.
//!
//! ## Purpose
//!
//! This module defines the `PairwiseResult` struct which encapsulates the
//! output of an elementwise dyadic computation: the input columns, the
//! computed column, and the operation that produced it.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Consistency**: Input columns are stored in their original order.
//!
//! ## Invariants
//!
//! * All three columns have the same length.
//! * `values[i]` is exactly `operation.apply(x[i], y[i])`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::ops::BinaryOp;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of an elementwise dyadic computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseResult<T> {
    /// First input column, in original order.
    pub x: Vec<T>,

    /// Second input column, in original order.
    pub y: Vec<T>,

    /// Computed column: `values[i] = operation.apply(x[i], y[i])`.
    pub values: Vec<T>,

    /// Operation that produced the computed column.
    pub operation: BinaryOp,
}

impl<T: Float> PairwiseResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of element pairs in the result.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the result is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if every computed value is finite.
    pub fn all_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for PairwiseResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Operation:   {}", self.operation.name())?;
        writeln!(f)?;

        writeln!(f, "Computed Data:")?;
        writeln!(f, "{:>8} {:>12} {:>12}", "X", "Y", "Result")?;
        writeln!(f, "{:-<34}", "")?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>8.2} {:>12.2} {:>12.5}",
                self.x[idx], self.y[idx], self.values[idx]
            )?;
        }

        Ok(())
    }
}
