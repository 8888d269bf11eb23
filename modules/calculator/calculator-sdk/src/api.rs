//! Calculator API trait and error types

use async_trait::async_trait;

use crate::models::Operation;

/// Calculator API trait
///
/// Every call is stateless: identical inputs always produce identical outputs.
#[async_trait]
pub trait CalculatorClient: Send + Sync {
    /// Apply a parsed operation to the operands.
    ///
    /// `second` is ignored by unary operations.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] for a zero divisor.
    async fn dispatch(
        &self,
        op: Operation,
        first: f64,
        second: f64,
    ) -> Result<f64, CalculatorError>;

    /// Parse a raw operation name and apply it to the operands.
    ///
    /// # Errors
    /// Returns [`CalculatorError::UnknownOperation`] for a name outside the
    /// closed set, or any error from [`dispatch`](Self::dispatch).
    async fn calculate(
        &self,
        operation: &str,
        first: f64,
        second: f64,
    ) -> Result<f64, CalculatorError>;
}

/// Error type for calculator operations.
///
/// The `Display` text of each variant is the exact message shown to users.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// Divide was invoked with a zero second operand.
    #[error("Error: Division by zero")]
    DivisionByZero,

    /// The operation name is not one of the known operations.
    #[error("Error: Unknown operation")]
    UnknownOperation(String),

    /// An operand could not be read as a number.
    #[error("Error: invalid number '{0}'")]
    InvalidOperand(String),

    /// The computation overflowed to infinity or produced NaN.
    #[error("Error: result is not a finite number")]
    NonFiniteResult,
}

impl CalculatorError {
    /// Soft errors are user-facing labeled values rather than faults.
    ///
    /// Presentation layers render them inline, the same way as a numeric result.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        matches!(
            self,
            Self::UnknownOperation(_) | Self::InvalidOperand(_) | Self::NonFiniteResult
        )
    }
}
