//! Configuration management for opcalc

mod policy;
mod settings;

pub use policy::OverflowPolicy;
pub use settings::{CONFIG_FILE_NAME, EvalConfig};
