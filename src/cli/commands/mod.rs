//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command loads a procedure
//! definition file first; failures to load it share one exit code.

pub mod check;
pub mod dispatcher;
pub mod render;
pub mod run;

pub use dispatcher::{Command, CommandDispatcher, CommandIo, CommandResult};

use std::io::Write;
use std::path::Path;

use crate::check::{HumanFormatter, ProblemFormatter};
use crate::config::load_procedure_file;
use crate::error::{Result, RunsheetError};
use crate::procedure::Procedure;

/// Exit code for a procedure with consistency problems.
pub const EXIT_PROBLEMS: i32 = 1;

/// Exit code for a definition file that could not be loaded.
pub const EXIT_NO_PROCEDURE: i32 = 2;

/// Load a definition file, reporting missing or malformed files on `error`.
///
/// Returns `Ok(None)` when the failure was reported.
fn load_or_report(path: &Path, error: &mut dyn Write) -> Result<Option<Procedure>> {
    match load_procedure_file(path) {
        Ok(procedure) => Ok(Some(procedure)),
        Err(e @ RunsheetError::DefinitionNotFound { .. })
        | Err(e @ RunsheetError::DefinitionParseError { .. }) => {
            writeln!(error, "Error: {}", e)?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Report the outcome of a render or run.
///
/// Validation problems and unknown steps are written to `error` and turned
/// into a failed result; other errors propagate.
fn report_outcome(outcome: Result<()>, error: &mut dyn Write) -> Result<CommandResult> {
    match outcome {
        Ok(()) => Ok(CommandResult::success()),
        Err(RunsheetError::InvalidProcedure { problems }) => {
            let mut error = error;
            HumanFormatter::new().format(&problems, &mut error)?;
            Ok(CommandResult::failure(EXIT_PROBLEMS))
        }
        Err(e @ RunsheetError::StepNotFound { .. }) => {
            writeln!(error, "Error: {}", e)?;
            Ok(CommandResult::failure(EXIT_PROBLEMS))
        }
        Err(e) => Err(e),
    }
}
