//! Domain service for calculator
//!
//! Maps an operation to its arithmetic function and forwards the operands.

use calculator_sdk::{CalculatorError, Operation, OperationShape};
use tracing::{debug, instrument};

use super::arithmetic;

/// Domain service that dispatches calculator operations.
///
/// Stateless: nothing is retained between calls, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Service;

impl Service {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Apply `op` to the operands. Unary operations receive only `first`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] for `Divide` with a zero `second`,
    /// and [`CalculatorError::NonFiniteResult`] when the result overflows or is NaN.
    #[instrument(level = "debug", skip(self), fields(operation = %op))]
    pub fn dispatch(
        &self,
        op: Operation,
        first: f64,
        second: f64,
    ) -> Result<f64, CalculatorError> {
        let result = match op.shape() {
            OperationShape::Binary(binary) => arithmetic::apply_binary(binary, first, second),
            OperationShape::Unary(unary) => Ok(arithmetic::apply_unary(unary, first)),
        }
        .and_then(|value| {
            if value.is_finite() {
                Ok(value)
            } else {
                Err(CalculatorError::NonFiniteResult)
            }
        });

        match &result {
            Ok(value) => debug!(value, "calculation completed"),
            Err(e) => debug!(error = %e, "calculation rejected"),
        }
        result
    }

    /// Parse raw operation text, then [`dispatch`](Self::dispatch).
    ///
    /// # Errors
    /// Returns [`CalculatorError::UnknownOperation`] when `operation` is not an
    /// exact operation name, or any error from `dispatch`.
    pub fn calculate(
        &self,
        operation: &str,
        first: f64,
        second: f64,
    ) -> Result<f64, CalculatorError> {
        let op = operation.parse::<Operation>().inspect_err(|_| {
            debug!(operation, "unknown operation requested");
        })?;
        self.dispatch(op, first, second)
    }
}
