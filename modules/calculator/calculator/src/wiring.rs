//! Wiring for the calculator module
//!
//! Provides `wire_client` to build the in-process `CalculatorClient`.

use std::sync::Arc;

use calculator_sdk::CalculatorClient;

use crate::client::LocalCalculatorClient;
use crate::domain::Service;

/// Build a `CalculatorClient` backed by a fresh domain `Service`.
#[must_use]
pub fn wire_client() -> Arc<dyn CalculatorClient> {
    let client = LocalCalculatorClient::new(Arc::new(Service::new()));
    tracing::debug!("CalculatorClient client wired");
    Arc::new(client)
}
