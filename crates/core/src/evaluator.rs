//! Operator dispatch for a single binary operation.
//!
//! [`Evaluator::evaluate`] is pure: it decides the outcome and returns it as
//! a `Result` without reporting anything. [`Evaluator::evaluate_or_zero`]
//! keeps the older calling convention where any failure is logged and
//! reported as `0`; its zero is indistinguishable from a genuine zero result.

use tracing::{debug, warn};

use crate::{
    config::{EvalConfig, OverflowPolicy},
    error::{Error, Result},
    types::{OperationRequest, Operator},
};

/// Evaluates [`OperationRequest`]s under a fixed [`EvalConfig`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn evaluate(&self, request: &OperationRequest) -> Result<i64> {
        let operator = Operator::try_from(request.operator)?;
        let OperationRequest { a, b, .. } = *request;

        debug!(a, b, %operator, policy = %self.config.overflow, "evaluating");

        if operator == Operator::Div && b == 0 {
            return Err(Error::DivisionByZero { a });
        }

        match self.config.overflow {
            OverflowPolicy::Checked => {
                let result = match operator {
                    Operator::Add => a.checked_add(b),
                    Operator::Sub => a.checked_sub(b),
                    Operator::Mul => a.checked_mul(b),
                    Operator::Div => a.checked_div(b),
                };
                result.ok_or(Error::Overflow { a, b, operator })
            }
            OverflowPolicy::Wrapping => Ok(match operator {
                Operator::Add => a.wrapping_add(b),
                Operator::Sub => a.wrapping_sub(b),
                Operator::Mul => a.wrapping_mul(b),
                Operator::Div => a.wrapping_div(b),
            }),
            OverflowPolicy::Saturating => Ok(match operator {
                Operator::Add => a.saturating_add(b),
                Operator::Sub => a.saturating_sub(b),
                Operator::Mul => a.saturating_mul(b),
                Operator::Div => a.saturating_div(b),
            }),
        }
    }

    pub fn evaluate_or_zero(&self, request: &OperationRequest) -> i64 {
        match self.evaluate(request) {
            Ok(result) => result,
            Err(e) => {
                warn!("{e}");
                0
            }
        }
    }
}

/// Evaluate with the default configuration (checked overflow).
pub fn evaluate(request: &OperationRequest) -> Result<i64> {
    Evaluator::default().evaluate(request)
}

/// Evaluate with the default configuration, logging any failure and returning `0`.
pub fn evaluate_or_zero(request: &OperationRequest) -> i64 {
    Evaluator::default().evaluate_or_zero(request)
}
