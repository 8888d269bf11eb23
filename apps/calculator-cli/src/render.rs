//! Turns calculation outcomes into terminal output.

use calculator_sdk::{CalculationResult, CalculatorError};

use crate::config::{CalculatorConfig, ErrorDisplay};

/// Text to print and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Surface as an alert: stderr and a failing exit status.
    pub alert: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    division_by_zero: ErrorDisplay,
    precision: Option<usize>,
    json: bool,
}

impl Renderer {
    #[must_use]
    pub const fn new(config: &CalculatorConfig, json: bool) -> Self {
        Self {
            division_by_zero: config.division_by_zero,
            precision: config.precision,
            json,
        }
    }

    /// Whether output is JSON rather than plain text.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        match self.precision {
            Some(precision) => format!("{value:.precision$}"),
            None => value.to_string(),
        }
    }

    /// Soft errors are always inline; a division by zero follows the
    /// configured display.
    #[must_use]
    pub fn render(&self, outcome: Result<f64, CalculatorError>) -> Rendered {
        let alert = outcome
            .as_ref()
            .is_err_and(|e| !e.is_soft() && self.division_by_zero == ErrorDisplay::Alert);

        let text = if self.json {
            let result = match outcome {
                Ok(value) => CalculationResult::Value {
                    value: self.round(value),
                },
                Err(e) => CalculationResult::from(Err(e)),
            };
            serde_json::json!(result).to_string()
        } else {
            match outcome {
                Ok(value) => self.format_value(value),
                Err(e) => e.to_string(),
            }
        };

        Rendered { text, alert }
    }

    fn round(&self, value: f64) -> f64 {
        if self.precision.is_none() {
            return value;
        }
        self.format_value(value).parse().unwrap_or(value)
    }
}
