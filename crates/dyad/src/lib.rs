//! # Dyad: Dyadic Arithmetic Operations for Rust
//!
//! Pure, deterministic two-input arithmetic: `sum`, `product`, `minus`, and
//! `rms` (root-mean-square), generic over floating-point precision, with an
//! elementwise engine for applying one operation across paired slices.
//!
//! ## What is a dyadic operation?
//!
//! A dyadic operation is a function of exactly two operands. This crate
//! implements the four classic ones used in paired-measurement pipelines:
//! addition, multiplication, subtraction, and the root-mean-square of two
//! values, `sqrt((a² + b²) / 2)`.
//!
//! ## Quick Start
//!
//! ### Scalar functions
//!
//! The four operations are plain free functions. They never validate, never
//! fail, and propagate IEEE-754 semantics for non-finite inputs:
//!
//! ```rust
//! use dyad::prelude::*;
//!
//! assert_eq!(sum(1.0, 2.0), 3.0);
//! assert_eq!(product(10.0, 20.0), 200.0);
//! assert_eq!(minus(1.0, 1.0), 0.0);
//! assert_eq!(rms(6.0, 6.0), 6.0);
//! ```
//!
//! ### Elementwise application
//!
//! Build a model once, then apply an operation across paired slices:
//!
//! ```rust
//! use dyad::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0];
//! let y = vec![4.0, 5.0, 6.0];
//!
//! let model = Dyad::new().operation(Sum).build()?;
//! let result = model.apply(&x, &y)?;
//!
//! assert_eq!(result.values, vec![5.0, 7.0, 9.0]);
//! # Result::<(), DyadError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 3
//!   Operation:   Sum
//!
//! Computed Data:
//!        X            Y       Result
//! ----------------------------------
//!     1.00         4.00      5.00000
//!     2.00         5.00      7.00000
//!     3.00         6.00      9.00000
//! ```
//!
//! ### Result and Error Handling
//!
//! The slice path returns `Result<PairwiseResult<T>, DyadError>`. Structural
//! misuse (empty inputs, mismatched lengths, a builder parameter set twice)
//! is reported as an error; the `?` operator is idiomatic:
//!
//! ```rust
//! use dyad::prelude::*;
//! # let x = vec![1.0, 2.0, 3.0];
//! # let y = vec![2.0, 4.0, 8.0];
//!
//! let model = Dyad::new().operation(Rms).build()?;
//!
//! match model.apply(&x, &y) {
//!     Ok(result) => println!("{}", result),
//!     Err(e) => eprintln!("Application failed: {}", e),
//! }
//! # Result::<(), DyadError>::Ok(())
//! ```
//!
//! By default, non-finite elements flow through the elementwise path exactly
//! as they do through the scalar functions. Call `.strict()` on the builder
//! to reject NaN or infinite elements up front instead:
//!
//! ```rust
//! use dyad::prelude::*;
//!
//! let x = vec![1.0, f64::NAN, 3.0];
//! let y = vec![4.0, 5.0, 6.0];
//!
//! let model = Dyad::new().operation(Product).strict().build()?;
//! assert!(model.apply(&x, &y).is_err());
//! # Result::<(), DyadError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! dyad = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` inputs to reduce memory footprint on constrained targets; the
//! math layer is allocation-free, and only the elementwise path allocates.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types.
mod primitives;

// Layer 2: Math - pure dyadic operations.
mod math;

// Layer 3: Engine - validation, execution, and output types.
mod engine;

// High-level fluent API for dyadic computation.
mod api;

// Standard dyad prelude.
pub mod prelude {
    pub use crate::api::{
        BinaryOp,
        BinaryOp::{Minus, Product, Rms, Sum},
        DyadBuilder as Dyad, DyadError, DyadModel, PairwiseResult, minus, product, rms, sum,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
