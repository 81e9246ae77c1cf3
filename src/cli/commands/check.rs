//! Check command implementation.
//!
//! The `runsheet check` command validates a procedure definition and lists
//! every consistency problem found.

use crate::check::{HumanFormatter, JsonFormatter, OutputFormat, ProblemFormatter};
use crate::cli::args::CheckArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandIo, CommandResult};
use super::{load_or_report, EXIT_NO_PROCEDURE, EXIT_PROBLEMS};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, io: &mut CommandIo<'_>) -> Result<CommandResult> {
        let Some(procedure) = load_or_report(&self.args.file, io.error)? else {
            return Ok(CommandResult::failure(EXIT_NO_PROCEDURE));
        };

        let problems = procedure.problems();
        tracing::debug!(
            "Checked {}: {} problem(s)",
            self.args.file.display(),
            problems.len()
        );

        match self.args.format {
            OutputFormat::Human => HumanFormatter::new().format(&problems, &mut io.output)?,
            OutputFormat::Json => JsonFormatter::new().format(&problems, &mut io.output)?,
        }

        if problems.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(EXIT_PROBLEMS))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn run(path: PathBuf, format: OutputFormat) -> (CommandResult, String, String) {
        let cmd = CheckCommand::new(CheckArgs { file: path, format });
        let mut input: &[u8] = b"";
        let mut output = Vec::new();
        let mut error = Vec::new();
        let result = cmd
            .execute(&mut CommandIo::new(&mut input, &mut output, &mut error))
            .unwrap();
        (
            result,
            String::from_utf8(output).unwrap(),
            String::from_utf8(error).unwrap(),
        )
    }

    fn write(temp: &TempDir, yaml: &str) -> PathBuf {
        let path = temp.path().join("procedure.yml");
        fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn clean_procedure_succeeds() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "short: Clean\nsteps:\n  - name: a\n    short: A\n");
        let (result, output, _) = run(path, OutputFormat::Human);
        assert!(result.success);
        assert_eq!(output, "No problems found\n");
    }

    #[test]
    fn problems_fail_with_exit_code_1() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "short: Broken\nsteps:\n  - name: a\n    inputs:\n      - { name: x, type: int }\n",
        );
        let (result, output, _) = run(path, OutputFormat::Human);
        assert_eq!(result.exit_code, 1);
        assert!(output.contains("error[missing-short]"));
        assert!(output.contains("error[dangling-input]"));
        assert!(output.contains("Found 2 problem(s)"));
    }

    #[test]
    fn json_format_is_parseable() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "short: Broken\nsteps:\n  - short: Nameless\n");
        let (result, output, _) = run(path, OutputFormat::Json);
        assert!(!result.success);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["total"], 1);
        assert_eq!(value["problems"][0]["kind"], "missing-name");
    }

    #[test]
    fn missing_file_fails_with_exit_code_2() {
        let temp = TempDir::new().unwrap();
        let (result, output, error) = run(temp.path().join("nope.yml"), OutputFormat::Human);
        assert_eq!(result.exit_code, 2);
        assert!(output.is_empty());
        assert!(error.contains("Procedure definition not found"));
    }
}
