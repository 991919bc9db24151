use anyhow::Result;
use opcalc_core::{Evaluator, OperationRequest, OverflowPolicy};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::utils::resolve_config;

#[derive(Debug, Serialize)]
struct EvalOutput {
    a: i64,
    b: i64,
    operator: char,
    result: i64,
}

pub fn eval_command(
    a: i64,
    operator: char,
    b: i64,
    json: bool,
    sentinel: bool,
    overflow: Option<OverflowPolicy>,
    config_path: Option<&Path>,
) -> Result<()> {
    let evaluator = Evaluator::new(resolve_config(config_path, overflow)?);
    let request = OperationRequest::new(a, operator, b);

    debug!("Evaluating {:?}", request);

    let result = if sentinel {
        evaluator.evaluate_or_zero(&request)
    } else {
        evaluator.evaluate(&request)?
    };

    if json {
        let output = EvalOutput {
            a,
            b,
            operator,
            result,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{result}");
    }

    Ok(())
}
