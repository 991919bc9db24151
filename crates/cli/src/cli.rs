use anyhow::Result;
use clap::{Parser, Subcommand};
use opcalc_core::OverflowPolicy;
use std::path::PathBuf;

use crate::commands::{batch_command, eval_command, init_command};

#[derive(Parser, Debug)]
#[command(name = "opcalc")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Path to a config file (defaults to the nearest .opcalc.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate one binary operation (operators: + - x /)
    #[command(visible_alias = "e", allow_negative_numbers = true)]
    Eval {
        /// Left operand
        a: i64,

        /// Operator character
        operator: char,

        /// Right operand
        b: i64,

        /// Print the request and result as JSON
        #[arg(long)]
        json: bool,

        /// Print 0 instead of failing when the operation cannot be evaluated
        #[arg(long)]
        sentinel: bool,

        /// Override the configured overflow policy (checked, wrapping, saturating)
        #[arg(long)]
        overflow: Option<OverflowPolicy>,
    },
    /// Evaluate a JSON array of requests from a file ("-" for stdin)
    #[command(visible_alias = "b")]
    Batch {
        /// Input file containing [{"a": .., "b": .., "operator": ".."}, ...]
        input: String,

        /// Override the configured overflow policy (checked, wrapping, saturating)
        #[arg(long)]
        overflow: Option<OverflowPolicy>,
    },
    /// Write a default .opcalc.json
    Init {
        /// Directory to write the config into
        #[arg(short, long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Execute the selected command
    pub fn execute(self) -> Result<()> {
        let config_path = self.config.as_deref();
        match self.command {
            Commands::Eval {
                a,
                operator,
                b,
                json,
                sentinel,
                overflow,
            } => eval_command(a, operator, b, json, sentinel, overflow, config_path),
            Commands::Batch { input, overflow } => batch_command(&input, overflow, config_path),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
