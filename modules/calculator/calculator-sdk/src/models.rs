//! Public models for the calculator module.
//!
//! These are transport-agnostic data structures shared by the engine and
//! every presentation layer that drives it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::CalculatorError;

/// Label of the first operand field.
pub const FIRST_OPERAND_LABEL: &str = "First Number";
/// Label of the second operand field.
pub const SECOND_OPERAND_LABEL: &str = "Second Number (ignored for Square)";
/// Label of the operation selector.
pub const OPERATION_LABEL: &str = "Operation";

/// A calculator operation, one of a closed set of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Operation {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
    Square,
}

/// Operations that take both operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Operations that take only the first operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Square,
}

/// Call shape of an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationShape {
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl Operation {
    /// All operations in selector order.
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Square,
    ];

    /// Exact name used for parsing and display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Square => "Square",
        }
    }

    #[must_use]
    pub const fn shape(self) -> OperationShape {
        match self {
            Self::Add => OperationShape::Binary(BinaryOp::Add),
            Self::Subtract => OperationShape::Binary(BinaryOp::Subtract),
            Self::Multiply => OperationShape::Binary(BinaryOp::Multiply),
            Self::Divide => OperationShape::Binary(BinaryOp::Divide),
            Self::Square => OperationShape::Unary(UnaryOp::Square),
        }
    }

    /// Whether the second operand field should be shown for this operation.
    #[must_use]
    pub const fn takes_second_operand(self) -> bool {
        matches!(self.shape(), OperationShape::Binary(_))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| CalculatorError::UnknownOperation(s.to_owned()))
    }
}

/// Outcome of a single calculation: exactly one of a value or an error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalculationResult {
    Value { value: f64 },
    Error { message: String },
}

impl From<Result<f64, CalculatorError>> for CalculationResult {
    fn from(result: Result<f64, CalculatorError>) -> Self {
        match result {
            Ok(value) => Self::Value { value },
            Err(e) => Self::Error {
                message: e.to_string(),
            },
        }
    }
}

/// Parse operand text from an input field.
///
/// Blank input means the field default of 0.
///
/// # Errors
/// Returns [`CalculatorError::InvalidOperand`] if the text is not a finite
/// number (`inf` and `NaN` are rejected).
pub fn parse_operand(text: &str) -> Result<f64, CalculatorError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CalculatorError::InvalidOperand(trimmed.to_owned()))
}

/// A canonical example row shown next to the calculator form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Example {
    pub operation: Operation,
    pub first: f64,
    pub second: f64,
}

pub const EXAMPLES: [Example; 5] = [
    Example {
        operation: Operation::Add,
        first: 5.0,
        second: 3.0,
    },
    Example {
        operation: Operation::Subtract,
        first: 10.0,
        second: 4.0,
    },
    Example {
        operation: Operation::Multiply,
        first: 6.0,
        second: 7.0,
    },
    Example {
        operation: Operation::Divide,
        first: 15.0,
        second: 3.0,
    },
    Example {
        operation: Operation::Square,
        first: 4.0,
        second: 0.0,
    },
];

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_parse_is_exact_match() {
        let err = "add".parse::<Operation>().unwrap_err();
        assert_eq!(err, CalculatorError::UnknownOperation("add".to_owned()));
        assert!(" Add".parse::<Operation>().is_err());
        assert!("Unknown".parse::<Operation>().is_err());
    }

    #[test]
    fn test_default_is_add() {
        assert_eq!(Operation::default(), Operation::Add);
    }

    #[test]
    fn test_only_square_hides_second_operand() {
        let hidden: Vec<_> = Operation::ALL
            .into_iter()
            .filter(|op| !op.takes_second_operand())
            .collect();
        assert_eq!(hidden, vec![Operation::Square]);
    }

    #[test]
    fn test_shape_split() {
        assert_eq!(
            Operation::Square.shape(),
            OperationShape::Unary(UnaryOp::Square)
        );
        assert_eq!(
            Operation::Divide.shape(),
            OperationShape::Binary(BinaryOp::Divide)
        );
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("").unwrap(), 0.0);
        assert_eq!(parse_operand("   ").unwrap(), 0.0);
        assert_eq!(parse_operand(" 3.5 ").unwrap(), 3.5);
        assert_eq!(parse_operand("-4").unwrap(), -4.0);
        assert_eq!(
            parse_operand("four").unwrap_err(),
            CalculatorError::InvalidOperand("four".to_owned())
        );
    }

    #[test]
    fn test_parse_operand_rejects_non_finite() {
        for text in ["inf", "-inf", "NaN", "infinity", "1e400"] {
            assert_eq!(
                parse_operand(text).unwrap_err(),
                CalculatorError::InvalidOperand(text.to_owned()),
                "{text}"
            );
        }
    }

    #[test]
    fn test_result_serialization() {
        let ok = CalculationResult::from(Ok(8.0));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({"status": "value", "value": 8.0})
        );

        let err = CalculationResult::from(Err(CalculatorError::DivisionByZero));
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({"status": "error", "message": "Error: Division by zero"})
        );
    }

    #[test]
    fn test_examples_cover_every_operation() {
        let ops: Vec<_> = EXAMPLES.iter().map(|e| e.operation).collect();
        assert_eq!(ops, Operation::ALL.to_vec());
    }
}
