//! Pure arithmetic functions.
//!
//! None of these catch errors or mutate their inputs. Only `divide` can fail.

use calculator_sdk::{BinaryOp, CalculatorError, UnaryOp};

#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// # Errors
/// Returns [`CalculatorError::DivisionByZero`] when `b` is zero (either sign).
pub fn divide(a: f64, b: f64) -> Result<f64, CalculatorError> {
    if b == 0.0 {
        return Err(CalculatorError::DivisionByZero);
    }
    Ok(a / b)
}

#[must_use]
pub fn square(a: f64) -> f64 {
    a * a
}

/// Apply a binary operation.
///
/// # Errors
/// Propagates [`divide`] failures.
pub fn apply_binary(op: BinaryOp, a: f64, b: f64) -> Result<f64, CalculatorError> {
    match op {
        BinaryOp::Add => Ok(add(a, b)),
        BinaryOp::Subtract => Ok(subtract(a, b)),
        BinaryOp::Multiply => Ok(multiply(a, b)),
        BinaryOp::Divide => divide(a, b),
    }
}

#[must_use]
pub fn apply_unary(op: UnaryOp, a: f64) -> f64 {
    match op {
        UnaryOp::Square => square(a),
    }
}
