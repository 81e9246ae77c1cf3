//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::check::OutputFormat;
use crate::procedure::ROOT_NAME;

/// Runsheet - validate, document and walk through runbooks.
#[derive(Debug, Parser)]
#[command(name = "runsheet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a procedure definition
    Check(CheckArgs),

    /// Print a procedure's Markdown documentation
    Render(RenderArgs),

    /// Walk through a procedure step by step
    Run(RunArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Procedure definition file (YAML)
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RenderArgs {
    /// Procedure definition file (YAML)
    pub file: PathBuf,

    /// Absolute name of the step to document
    #[arg(value_name = "STEP_NAME", default_value = ROOT_NAME)]
    pub step: String,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Procedure definition file (YAML)
    pub file: PathBuf,

    /// Absolute name of the step to start from
    #[arg(value_name = "STEP_NAME", default_value = ROOT_NAME)]
    pub step: String,
}
