//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandIo`] for the streams a command talks to
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::{BufRead, Write};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `io` - Operator input plus the output and diagnostic streams
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, io: &mut CommandIo<'_>) -> Result<CommandResult>;
}

/// Streams a command reads from and writes to.
pub struct CommandIo<'a> {
    /// Operator responses.
    pub input: &'a mut dyn BufRead,

    /// Documents, steps and reports.
    pub output: &'a mut dyn Write,

    /// Diagnostics that should not mix with the output.
    pub error: &'a mut dyn Write,
}

impl<'a> CommandIo<'a> {
    pub fn new(
        input: &'a mut dyn BufRead,
        output: &'a mut dyn Write,
        error: &'a mut dyn Write,
    ) -> Self {
        Self {
            input,
            output,
            error,
        }
    }
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, io: &mut CommandIo<'_>) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(args.clone());
                cmd.execute(io)
            }
            Commands::Render(args) => {
                let cmd = super::render::RenderCommand::new(args.clone());
                cmd.execute(io)
            }
            Commands::Run(args) => {
                let cmd = super::run::RunCommand::new(args.clone());
                cmd.execute(io)
            }
        }
    }
}
