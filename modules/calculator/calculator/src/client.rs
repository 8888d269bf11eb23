//! Local client implementation of CalculatorClient
//!
//! Internal client returned by `wire_client()`. Not exported.

use std::sync::Arc;

use async_trait::async_trait;
use calculator_sdk::{CalculatorClient, CalculatorError, Operation};

use crate::domain::Service;

/// Local client implementation that delegates to the module's Service.
pub struct LocalCalculatorClient {
    service: Arc<Service>,
}

impl LocalCalculatorClient {
    #[must_use]
    pub const fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CalculatorClient for LocalCalculatorClient {
    async fn dispatch(
        &self,
        op: Operation,
        first: f64,
        second: f64,
    ) -> Result<f64, CalculatorError> {
        self.service.dispatch(op, first, second)
    }

    async fn calculate(
        &self,
        operation: &str,
        first: f64,
        second: f64,
    ) -> Result<f64, CalculatorError> {
        self.service.calculate(operation, first, second)
    }
}
