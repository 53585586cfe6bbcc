//! Dyadic scalar operations and their algebraic properties.
//!
//! ## Purpose
//!
//! This module provides the four dyadic operations exposed by the crate
//! (`sum`, `product`, `minus`, and `rms`) both as free functions and as the
//! `BinaryOp` enum with per-operation algebraic metadata.
//!
//! ## Design notes
//!
//! * **Purity**: Every operation is deterministic and side-effect free.
//! * **Generics**: Operations are generic over `Float` types (`f32`, `f64`).
//! * **Propagation**: Non-finite inputs follow IEEE-754 semantics untouched.
//! * **Metadata**: Each operation carries precomputed algebraic properties.
//!
//! ## Key concepts
//!
//! * **RMS**: Root-mean-square of two values, `sqrt((a² + b²) / 2)`.
//! * **Algebraic properties**: Commutativity, associativity, and identity
//!   elements are exposed per operation for use by callers.
//!
//! ## Invariants
//!
//! * `rms(a, b) >= 0` for all finite real inputs.
//! * `BinaryOp::apply` agrees exactly with the corresponding free function.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (no NaN/infinity rejection).
//! * This module does not operate on slices (responsibility of the engine).

// External dependencies
use num_traits::Float;

// ============================================================================
// Scalar Operations
// ============================================================================

/// Sum of two values: `a + b`.
///
/// Commutative and associative. Non-finite inputs propagate standard
/// floating-point semantics.
#[inline]
pub fn sum<T: Float>(a: T, b: T) -> T {
    a + b
}

/// Product of two values: `a * b`.
///
/// Commutative and associative.
#[inline]
pub fn product<T: Float>(a: T, b: T) -> T {
    a * b
}

/// Difference of two values: `a - b`.
///
/// Not commutative: `minus(a, b) == -minus(b, a)`.
#[inline]
pub fn minus<T: Float>(a: T, b: T) -> T {
    a - b
}

/// Root-mean-square of two values: `sqrt((a² + b²) / 2)`.
///
/// Non-negative for all finite real inputs, and `rms(a, a) == |a|`.
#[inline]
pub fn rms<T: Float>(a: T, b: T) -> T {
    let two = T::one() + T::one();
    ((a * a + b * b) / two).sqrt()
}

// ============================================================================
// Operation Properties
// ============================================================================

/// # Algebraic Properties
///
/// | Operation | Formula               | Commutative | Associative | Identity |
/// |-----------|-----------------------|-------------|-------------|----------|
/// | Sum       | a + b                 | yes         | yes         | 0        |
/// | Product   | a * b                 | yes         | yes         | 1        |
/// | Minus     | a - b                 | no          | no          | none     |
/// | Rms       | sqrt((a² + b²) / 2)   | yes         | no          | none     |
///
/// **Note**: `Minus` has a right identity (0) but no two-sided identity, so
/// none is listed. `Rms` is commutative but folding it over more than two
/// values is order-sensitive, hence not associative.
///
/// Algebraic properties of a dyadic operation.
struct OpProperties {
    /// Whether `op(a, b) == op(b, a)` for all inputs.
    commutative: bool,

    /// Whether `op(op(a, b), c) == op(a, op(b, c))` for all inputs.
    associative: bool,

    /// Two-sided identity element `e` with `op(a, e) == op(e, a) == a`.
    identity: Option<f64>,
}

/// Precomputed properties for the Sum operation.
const SUM_PROPERTIES: OpProperties = OpProperties {
    commutative: true,
    associative: true,
    identity: Some(0.0),
};

/// Precomputed properties for the Product operation.
const PRODUCT_PROPERTIES: OpProperties = OpProperties {
    commutative: true,
    associative: true,
    identity: Some(1.0),
};

/// Precomputed properties for the Minus operation.
const MINUS_PROPERTIES: OpProperties = OpProperties {
    commutative: false,
    associative: false,
    identity: None,
};

/// Precomputed properties for the Rms operation.
const RMS_PROPERTIES: OpProperties = OpProperties {
    commutative: true,
    associative: false,
    identity: None,
};

// ============================================================================
// Binary Operation Enum
// ============================================================================

/// Dyadic operation selector.
///
/// Each variant names one of the four operations as a first-class value,
/// suitable for configuring elementwise execution or for dispatching on an
/// operation chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinaryOp {
    /// Addition: `a + b`.
    ///
    /// This is the default operation.
    #[default]
    Sum,

    /// Multiplication: `a * b`.
    Product,

    /// Subtraction: `a - b`.
    Minus,

    /// Root-mean-square: `sqrt((a² + b²) / 2)`.
    Rms,
}

impl BinaryOp {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the operation.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            BinaryOp::Sum => "Sum",
            BinaryOp::Product => "Product",
            BinaryOp::Minus => "Minus",
            BinaryOp::Rms => "Rms",
        }
    }

    /// Get the operation properties.
    const fn properties(&self) -> &'static OpProperties {
        match self {
            BinaryOp::Sum => &SUM_PROPERTIES,
            BinaryOp::Product => &PRODUCT_PROPERTIES,
            BinaryOp::Minus => &MINUS_PROPERTIES,
            BinaryOp::Rms => &RMS_PROPERTIES,
        }
    }

    // ========================================================================
    // Property Accessors
    // ========================================================================

    /// Returns `true` if the operation is commutative.
    #[inline]
    pub fn is_commutative(&self) -> bool {
        self.properties().commutative
    }

    /// Returns `true` if the operation is associative.
    #[inline]
    pub fn is_associative(&self) -> bool {
        self.properties().associative
    }

    /// Returns the two-sided identity element, if one exists.
    #[inline]
    pub fn identity(&self) -> Option<f64> {
        self.properties().identity
    }

    // ========================================================================
    // Application
    // ========================================================================

    /// Apply the operation to a pair of values.
    ///
    /// Identical semantics to the corresponding free function, including
    /// non-finite propagation.
    #[inline]
    pub fn apply<T: Float>(&self, a: T, b: T) -> T {
        match self {
            BinaryOp::Sum => sum(a, b),
            BinaryOp::Product => product(a, b),
            BinaryOp::Minus => minus(a, b),
            BinaryOp::Rms => rms(a, b),
        }
    }
}
