//! opcalc-core - evaluation of a single binary integer operation
//!
//! This crate provides:
//! - The request model (`OperationRequest`) and the operator set (`Operator`)
//! - A pure evaluator returning a tagged `Result`, plus a zero-on-failure
//!   variant that reports through `tracing`
//! - Overflow policy configuration loaded from `.opcalc.json`
pub mod config;
pub mod error;
pub mod evaluator;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use types::*;

pub use config::{EvalConfig, OverflowPolicy};
pub use evaluator::{Evaluator, evaluate, evaluate_or_zero};
