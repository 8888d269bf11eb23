//! Subcommand implementations.

use std::process::ExitCode;

use calculator_sdk::{
    CalculationResult, CalculatorClient, CalculatorError, EXAMPLES, FIRST_OPERAND_LABEL,
    OPERATION_LABEL, Operation, SECOND_OPERAND_LABEL, parse_operand,
};
use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::render::{Rendered, Renderer};

#[derive(Args, Debug)]
pub struct EvalArgs {
    #[arg(value_name = "OPERATION", help = OPERATION_LABEL)]
    pub operation: String,

    #[arg(value_name = "FIRST", help = FIRST_OPERAND_LABEL, allow_negative_numbers = true)]
    pub first: Option<String>,

    #[arg(value_name = "SECOND", help = SECOND_OPERAND_LABEL, allow_negative_numbers = true)]
    pub second: Option<String>,
}

impl EvalArgs {
    pub async fn run(&self, client: &dyn CalculatorClient, renderer: &Renderer) -> ExitCode {
        let outcome = self.evaluate(client).await;
        emit(&renderer.render(outcome))
    }

    /// Read the operand fields and hand them to the engine.
    ///
    /// The operation name is checked before any operand is read. Missing
    /// fields default to 0. The second field is not read at all for
    /// operations that hide it.
    async fn evaluate(&self, client: &dyn CalculatorClient) -> Result<f64, CalculatorError> {
        let op = self.operation.parse::<Operation>()?;
        let first = parse_operand(self.first.as_deref().unwrap_or_default())?;

        let second = if op.takes_second_operand() {
            parse_operand(self.second.as_deref().unwrap_or_default())?
        } else {
            if let Some(ignored) = &self.second {
                tracing::debug!(operation = %op, ignored = %ignored, "second operand ignored");
            }
            0.0
        };

        client.dispatch(op, first, second).await
    }
}

fn emit(rendered: &Rendered) -> ExitCode {
    if rendered.alert {
        eprintln!("{}", rendered.text.red().bold());
        ExitCode::FAILURE
    } else {
        println!("{}", rendered.text);
        ExitCode::SUCCESS
    }
}

/// Evaluate every example row.
///
/// # Errors
/// Returns an error if JSON output cannot be serialized.
pub async fn examples(
    client: &dyn CalculatorClient,
    renderer: &Renderer,
) -> anyhow::Result<ExitCode> {
    let mut rows = Vec::with_capacity(EXAMPLES.len());
    for example in &EXAMPLES {
        let outcome = client
            .dispatch(example.operation, example.first, example.second)
            .await;
        rows.push((example, outcome));
    }

    if renderer.json() {
        let rows: Vec<_> = rows
            .into_iter()
            .map(|(example, outcome)| {
                json!({
                    "operation": example.operation,
                    "first": example.first,
                    "second": example.second,
                    "result": CalculationResult::from(outcome),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{}",
        format!("{OPERATION_LABEL:<10} {:>8} {:>8}  Result", "First", "Second").bold()
    );
    for (example, outcome) in rows {
        let second = if example.operation.takes_second_operand() {
            renderer.format_value(example.second)
        } else {
            "-".to_owned()
        };
        let result = renderer.render(outcome).text;
        println!(
            "{:<10} {:>8} {second:>8}  {result}",
            example.operation.name(),
            renderer.format_value(example.first),
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Print each operation and which operand fields it shows.
pub fn operations(json: bool) {
    if json {
        let ops: Vec<_> = Operation::ALL
            .into_iter()
            .map(|op| {
                json!({
                    "operation": op,
                    "takes_second_operand": op.takes_second_operand(),
                    "default": op == Operation::default(),
                })
            })
            .collect();
        println!("{}", json!(ops));
        return;
    }

    for op in Operation::ALL {
        let fields = if op.takes_second_operand() {
            format!("{FIRST_OPERAND_LABEL}, {SECOND_OPERAND_LABEL}")
        } else {
            FIRST_OPERAND_LABEL.to_owned()
        };
        let marker = if op == Operation::default() { " (default)" } else { "" };
        println!("{:<10} {fields}{marker}", op.name());
    }
}
