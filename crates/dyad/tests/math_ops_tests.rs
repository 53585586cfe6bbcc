//! Tests for the dyadic scalar operations.
//!
//! These tests verify the four operations exposed by the crate for:
//! - Exact values at known points
//! - Algebraic properties (commutativity, identities, sign behavior)
//! - Non-finite propagation (NaN, infinity)
//! - Generic float support (f32 and f64)
//! - `BinaryOp` metadata and dispatch
//!
//! ## Test Organization
//!
//! 1. **Scalar Values** - Exact results at specific points
//! 2. **Algebraic Properties** - Commutativity, self-application, identities
//! 3. **Non-Finite Propagation** - NaN and infinity flow-through
//! 4. **Generic Floats** - f32/f64 agreement
//! 5. **Operation Metadata** - Names, properties, dispatch agreement

use approx::assert_relative_eq;

use dyad::prelude::*;

// ============================================================================
// Scalar Values Tests
// ============================================================================

/// Test sum at specific points.
///
/// Verifies the addition contract, including the 1 + 2 = 3 case.
#[test]
fn test_sum_values() {
    assert_eq!(sum(1.0, 2.0), 3.0);
    assert_eq!(sum(0.0, 0.0), 0.0);
    assert_eq!(sum(-1.5, 1.5), 0.0);
    assert_relative_eq!(sum(0.1f64, 0.2f64), 0.3f64, epsilon = 1e-12);
}

/// Test product at specific points.
///
/// Verifies multiplication, including sign handling for negative factors.
#[test]
fn test_product_values() {
    assert_eq!(product(10.0, 20.0), 200.0);
    assert_eq!(product(-1.0, -1.0), 1.0);
    assert_eq!(product(-3.0, 2.0), -6.0);
    assert_eq!(product(7.0, 0.0), 0.0);
}

/// Test minus at specific points.
///
/// Verifies subtraction, including the self-difference case.
#[test]
fn test_minus_values() {
    assert_eq!(minus(1.0, 1.0), 0.0);
    assert_eq!(minus(5.0, 3.0), 2.0);
    assert_eq!(minus(3.0, 5.0), -2.0);
}

/// Test rms at specific points.
///
/// Verifies the root-mean-square formula sqrt((a^2 + b^2) / 2).
#[test]
fn test_rms_values() {
    assert_eq!(rms(6.0, 6.0), 6.0);
    assert_eq!(rms(0.0, 0.0), 0.0);

    // sqrt((9 + 16) / 2) = sqrt(12.5)
    assert_relative_eq!(rms(3.0f64, 4.0f64), 12.5f64.sqrt(), epsilon = 1e-12);

    // Mixed signs contribute through their squares
    assert_relative_eq!(rms(-3.0f64, 4.0f64), 12.5f64.sqrt(), epsilon = 1e-12);
}

// ============================================================================
// Algebraic Properties Tests
// ============================================================================

/// Test commutativity of sum and product.
///
/// Verifies op(a, b) == op(b, a) over a grid of sample values.
#[test]
fn test_sum_product_commutativity() {
    let samples = [-7.5f64, -1.0, 0.0, 0.5, 2.0, 100.25];

    for &a in &samples {
        for &b in &samples {
            assert_eq!(sum(a, b), sum(b, a), "sum should commute for ({a}, {b})");
            assert_eq!(
                product(a, b),
                product(b, a),
                "product should commute for ({a}, {b})"
            );
        }
    }
}

/// Test rms commutativity.
///
/// Verifies rms(a, b) == rms(b, a); the operands only enter via squares.
#[test]
fn test_rms_commutativity() {
    let samples = [-4.0f64, -0.25, 0.0, 1.0, 9.5];

    for &a in &samples {
        for &b in &samples {
            assert_relative_eq!(rms(a, b), rms(b, a), epsilon = 1e-12);
        }
    }
}

/// Test minus self-application and anti-symmetry.
///
/// Verifies minus(a, a) == 0 and minus(a, b) == -minus(b, a).
#[test]
fn test_minus_properties() {
    let samples = [-100.0f64, -0.125, 0.0, 3.75, 42.0];

    for &a in &samples {
        assert_eq!(minus(a, a), 0.0, "minus({a}, {a}) should be zero");

        for &b in &samples {
            assert_eq!(minus(a, b), -minus(b, a));
        }
    }
}

/// Test rms non-negativity and self-application.
///
/// Verifies rms(a, b) >= 0 and rms(a, a) == |a|, including negative inputs.
#[test]
fn test_rms_properties() {
    let samples = [-12.0f64, -1.0, -0.5, 0.0, 0.5, 8.25];

    for &a in &samples {
        assert_relative_eq!(rms(a, a), a.abs(), epsilon = 1e-12);

        for &b in &samples {
            assert!(rms(a, b) >= 0.0, "rms({a}, {b}) should be non-negative");
        }
    }
}

/// Test identity elements.
///
/// Verifies 0 is the identity for sum and 1 for product.
#[test]
fn test_identity_elements() {
    let samples = [-3.5f64, 0.0, 1.0, 17.0];

    for &a in &samples {
        assert_eq!(sum(a, 0.0), a);
        assert_eq!(sum(0.0, a), a);
        assert_eq!(product(a, 1.0), a);
        assert_eq!(product(1.0, a), a);
    }
}

// ============================================================================
// Non-Finite Propagation Tests
// ============================================================================

/// Test NaN propagation through every operation.
///
/// Verifies that a NaN operand yields a NaN result, never a panic or error.
#[test]
fn test_nan_propagation() {
    let nan = f64::NAN;

    assert!(sum(nan, 1.0).is_nan());
    assert!(product(1.0, nan).is_nan());
    assert!(minus(nan, nan).is_nan());
    assert!(rms(nan, 2.0).is_nan());
}

/// Test infinity arithmetic.
///
/// Verifies standard IEEE-754 results for infinite operands.
#[test]
fn test_infinity_propagation() {
    let inf = f64::INFINITY;

    assert_eq!(sum(inf, 1.0), inf);
    assert_eq!(sum(f64::NEG_INFINITY, -1.0), f64::NEG_INFINITY);
    assert_eq!(product(f64::NEG_INFINITY, 2.0), f64::NEG_INFINITY);
    assert_eq!(rms(inf, 2.0), inf);

    // Indeterminate forms produce NaN
    assert!(minus(inf, inf).is_nan());
    assert!(product(0.0, inf).is_nan());
    assert!(sum(inf, f64::NEG_INFINITY).is_nan());
}

/// Test overflow to infinity is not intercepted.
///
/// Verifies that results exceeding the representable range become infinite.
#[test]
fn test_overflow_flows_to_infinity() {
    assert_eq!(sum(f64::MAX, f64::MAX), f64::INFINITY);
    assert_eq!(product(f64::MAX, 2.0), f64::INFINITY);
    assert_eq!(rms(f64::MAX, f64::MAX), f64::INFINITY);
}

// ============================================================================
// Generic Floats Tests
// ============================================================================

/// Test operations work with f32 generics.
///
/// Verifies that f32 and f64 agree within single-precision tolerance.
#[test]
fn test_generic_floats() {
    assert_relative_eq!(sum(1.5f32, 2.25f32) as f64, sum(1.5f64, 2.25f64));
    assert_relative_eq!(
        product(0.3f32, 0.7f32) as f64,
        product(0.3f64, 0.7f64),
        epsilon = 1e-6
    );
    assert_relative_eq!(
        rms(3.0f32, 4.0f32) as f64,
        rms(3.0f64, 4.0f64),
        epsilon = 1e-6
    );
    assert_eq!(minus(1.0f32, 1.0f32), 0.0f32);
}

// ============================================================================
// Operation Metadata Tests
// ============================================================================

/// Test operation names and the default variant.
#[test]
fn test_operation_names() {
    assert_eq!(BinaryOp::Sum.name(), "Sum");
    assert_eq!(BinaryOp::Product.name(), "Product");
    assert_eq!(BinaryOp::Minus.name(), "Minus");
    assert_eq!(BinaryOp::Rms.name(), "Rms");

    assert_eq!(BinaryOp::default(), Sum);
}

/// Test algebraic property metadata.
///
/// Verifies the commutativity/associativity flags and identity elements
/// match the mathematical facts.
#[test]
fn test_operation_properties() {
    assert!(Sum.is_commutative());
    assert!(Sum.is_associative());
    assert_eq!(Sum.identity(), Some(0.0));

    assert!(Product.is_commutative());
    assert!(Product.is_associative());
    assert_eq!(Product.identity(), Some(1.0));

    assert!(!Minus.is_commutative());
    assert!(!Minus.is_associative());
    assert_eq!(Minus.identity(), None);

    assert!(Rms.is_commutative());
    assert!(!Rms.is_associative());
    assert_eq!(Rms.identity(), None);
}

/// Test that the metadata flags describe actual behavior.
///
/// Spot-checks the non-commutative and non-associative claims numerically.
#[test]
fn test_properties_match_behavior() {
    // Minus is flagged non-commutative, and indeed 5 - 3 != 3 - 5
    assert_ne!(Minus.apply(5.0, 3.0), Minus.apply(3.0, 5.0));

    // Rms is flagged non-associative: rms(rms(a, b), c) != rms(a, rms(b, c))
    let (a, b, c) = (1.0f64, 2.0, 10.0);
    let left = Rms.apply(Rms.apply(a, b), c);
    let right = Rms.apply(a, Rms.apply(b, c));
    assert!((left - right).abs() > 1e-6);
}

/// Test `BinaryOp::apply` agrees with the free functions.
///
/// Verifies dispatch for every variant over a grid of sample pairs.
#[test]
fn test_apply_agreement() {
    let samples = [-2.5f64, 0.0, 1.0, 3.5];

    for &a in &samples {
        for &b in &samples {
            assert_eq!(Sum.apply(a, b), sum(a, b));
            assert_eq!(Product.apply(a, b), product(a, b));
            assert_eq!(Minus.apply(a, b), minus(a, b));
            assert_eq!(Rms.apply(a, b), rms(a, b));
        }
    }
}
