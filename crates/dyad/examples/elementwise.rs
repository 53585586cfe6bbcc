//! Elementwise Dyadic Computation Examples
//!
//! This example demonstrates the slice tier of the crate:
//! - Basic elementwise application with minimal configuration
//! - Strict finite validation
//! - Error handling for structural misuse
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use dyad::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), DyadError> {
    println!("{}", "=".repeat(60));
    println!("Dyad Elementwise Computation - Examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_basic_application()?;
    example_2_strict_validation()?;
    example_3_error_handling();

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Basic application
/// Demonstrates the simplest usage with minimal configuration
fn example_1_basic_application() -> Result<(), DyadError> {
    println!("Example 1: Basic Application");
    println!("{}", "-".repeat(60));

    let x = vec![1.0, 2.0, 3.0, 6.0];
    let y = vec![4.0, 5.0, 6.0, 6.0];

    let model = Dyad::new().operation(Rms).build()?;
    let result = model.apply(&x, &y)?;

    println!("{}", result);
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Strict validation
/// Demonstrates rejecting non-finite elements up front
fn example_2_strict_validation() -> Result<(), DyadError> {
    println!("Example 2: Strict Validation");
    println!("{}", "-".repeat(60));

    let x = vec![1.0, f64::NAN, 3.0];
    let y = vec![4.0, 5.0, 6.0];

    let model = Dyad::new().operation(Sum).strict().build()?;

    match model.apply(&x, &y) {
        Ok(_) => println!("unexpected success"),
        // Invalid numeric value: x[1]=NaN
        Err(e) => println!("rejected as expected: {}", e),
    }

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Structural error handling
/// Demonstrates the error paths for misused inputs
fn example_3_error_handling() {
    println!("Example 3: Error Handling");
    println!("{}", "-".repeat(60));

    let model = match Dyad::new().build() {
        Ok(m) => m,
        Err(e) => {
            println!("build failed: {}", e);
            return;
        }
    };

    // Length mismatch: x has 3 elements, y has 1
    if let Err(e) = model.apply(&[1.0, 2.0, 3.0], &[1.0]) {
        println!("mismatch: {}", e);
    }

    // Input slices are empty
    let empty: Vec<f64> = vec![];
    if let Err(e) = model.apply(&empty, &empty) {
        println!("empty: {}", e);
    }

    println!();
}
