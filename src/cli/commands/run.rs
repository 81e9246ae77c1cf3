//! Run command implementation.
//!
//! The `runsheet run` command walks an operator through a procedure one
//! step at a time.

use crate::cli::args::RunArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandIo, CommandResult};
use super::{load_or_report, report_outcome, EXIT_NO_PROCEDURE};

/// The run command implementation.
pub struct RunCommand {
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(args: RunArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }
}

impl Command for RunCommand {
    fn execute(&self, io: &mut CommandIo<'_>) -> Result<CommandResult> {
        let Some(procedure) = load_or_report(&self.args.file, io.error)? else {
            return Ok(CommandResult::failure(EXIT_NO_PROCEDURE));
        };

        tracing::debug!(
            "Running '{}' from {}",
            procedure.title(),
            self.args.file.display()
        );
        let outcome = procedure.execute_step_with(&self.args.step, &mut *io.input, &mut *io.output);
        report_outcome(outcome, io.error)
    }
}
