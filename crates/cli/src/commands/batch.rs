use anyhow::{Context, Result};
use opcalc_core::{Evaluator, OperationRequest, OverflowPolicy};
use serde::Serialize;
use std::{
    fs,
    io::{self, Read},
    path::Path,
};
use tracing::info;

use crate::utils::resolve_config;

/// Per-request result; serialized as `{"ok": n}` or `{"error": "..."}`
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ok(i64),
    Error(String),
}

pub fn evaluate_batch(evaluator: &Evaluator, requests: &[OperationRequest]) -> Vec<Outcome> {
    requests
        .iter()
        .map(|request| match evaluator.evaluate(request) {
            Ok(result) => Outcome::Ok(result),
            Err(e) => Outcome::Error(e.to_string()),
        })
        .collect()
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read requests from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))
    }
}

pub fn batch_command(
    input: &str,
    overflow: Option<OverflowPolicy>,
    config_path: Option<&Path>,
) -> Result<()> {
    let evaluator = Evaluator::new(resolve_config(config_path, overflow)?);

    let contents = read_input(input)?;
    let requests: Vec<OperationRequest> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse requests from {input}"))?;

    let outcomes = evaluate_batch(&evaluator, &requests);
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::Error(_)))
        .count();
    info!("Evaluated {} requests, {} failed", outcomes.len(), failed);

    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_do_not_abort_batch() {
        let requests = vec![
            OperationRequest::new(6, '+', 3),
            OperationRequest::new(1, '/', 0),
            OperationRequest::new(5, '?', 5),
            OperationRequest::new(7, '/', 2),
        ];

        let outcomes = evaluate_batch(&Evaluator::default(), &requests);
        assert_eq!(
            outcomes,
            vec![
                Outcome::Ok(9),
                Outcome::Error("Division by zero: 1 / 0".to_string()),
                Outcome::Error("Invalid character: ?".to_string()),
                Outcome::Ok(3),
            ]
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&[Outcome::Ok(18), Outcome::Error("bad".to_string())])
            .unwrap();
        assert_eq!(json, r#"[{"ok":18},{"error":"bad"}]"#);
    }
}
