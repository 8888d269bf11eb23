//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator engine:
//! - API trait (`CalculatorClient`)
//! - Error types (`CalculatorError`)
//! - Operation model (`Operation`, `UnaryOp`, `BinaryOp`) and result type
//! - Canonical example rows and field labels for presentation layers
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClient, Operation};
//!
//! let client: Arc<dyn CalculatorClient> = calculator::wire_client();
//! let sum = client.dispatch(Operation::Add, 5.0, 3.0).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod api;
pub mod models;

pub use api::{CalculatorClient, CalculatorError};
pub use models::{
    BinaryOp, CalculationResult, EXAMPLES, Example, FIRST_OPERAND_LABEL, OPERATION_LABEL,
    Operation, OperationShape, SECOND_OPERAND_LABEL, UnaryOp, parse_operand,
};
