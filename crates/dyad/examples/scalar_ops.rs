//! Scalar Dyadic Operation Examples
//!
//! This example demonstrates the scalar tier of the crate:
//! - The four free functions: sum, product, minus, rms
//! - Operation dispatch through the BinaryOp enum
//! - Algebraic metadata queries
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use dyad::prelude::*;

#[cfg(feature = "std")]
fn main() {
    println!("{}", "=".repeat(60));
    println!("Dyad Scalar Operations - Examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_free_functions();
    example_2_enum_dispatch();
    example_3_metadata();
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Free functions
/// Demonstrates the simplest usage, calling the operations directly
fn example_1_free_functions() {
    println!("Example 1: Free Functions");
    println!("{}", "-".repeat(60));

    println!("sum(1.0, 2.0)      = {}", sum(1.0, 2.0)); // 3
    println!("product(10.0, 20.0) = {}", product(10.0, 20.0)); // 200
    println!("minus(1.0, 1.0)    = {}", minus(1.0, 1.0)); // 0
    println!("rms(6.0, 6.0)      = {}", rms(6.0, 6.0)); // 6
    println!();
}

#[cfg(feature = "std")]
/// Example 2: Enum dispatch
/// Demonstrates selecting an operation at runtime
fn example_2_enum_dispatch() {
    println!("Example 2: Enum Dispatch");
    println!("{}", "-".repeat(60));

    let operations = [
        BinaryOp::Sum,
        BinaryOp::Product,
        BinaryOp::Minus,
        BinaryOp::Rms,
    ];

    for op in operations {
        println!("{:<8} applied to (3.0, 4.0) = {}", op.name(), op.apply(3.0, 4.0));
    }
    println!();
}

#[cfg(feature = "std")]
/// Example 3: Algebraic metadata
/// Demonstrates querying per-operation properties
fn example_3_metadata() {
    println!("Example 3: Algebraic Metadata");
    println!("{}", "-".repeat(60));

    for op in [BinaryOp::Sum, BinaryOp::Product, BinaryOp::Minus, BinaryOp::Rms] {
        println!(
            "{:<8} commutative: {:<5} associative: {:<5} identity: {:?}",
            op.name(),
            op.is_commutative(),
            op.is_associative(),
            op.identity()
        );
    }
    println!();
}
