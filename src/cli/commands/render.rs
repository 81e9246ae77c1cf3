//! Render command implementation.
//!
//! The `runsheet render` command prints the Markdown documentation of a
//! procedure, or of one step and its descendants.

use crate::cli::args::RenderArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandIo, CommandResult};
use super::{load_or_report, report_outcome, EXIT_NO_PROCEDURE};

/// The render command implementation.
pub struct RenderCommand {
    args: RenderArgs,
}

impl RenderCommand {
    /// Create a new render command.
    pub fn new(args: RenderArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RenderArgs {
        &self.args
    }
}

impl Command for RenderCommand {
    fn execute(&self, io: &mut CommandIo<'_>) -> Result<CommandResult> {
        let Some(procedure) = load_or_report(&self.args.file, io.error)? else {
            return Ok(CommandResult::failure(EXIT_NO_PROCEDURE));
        };

        let outcome = procedure.render_step(&mut io.output, &self.args.step);
        report_outcome(outcome, io.error)
    }
}
