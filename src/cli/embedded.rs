//! Command-line handling for procedures built in Rust.
//!
//! A program that defines its procedure with the builder API can hand its
//! arguments to [`handle_args`] and get a complete interface:
//!
//! ```text
//! rotate-key [--markdown] [STEP_NAME]
//! ```
//!
//! Without `--markdown` the named step is walked interactively; with it the
//! step's documentation is printed instead.
//!
//! # Example
//!
//! ```no_run
//! use runsheet::{handle_args, Procedure};
//!
//! let mut pcd = Procedure::new();
//! pcd.short("Rotate the API key");
//! pcd.add_step(|s| {
//!     s.name("generate").short("Generate a new key");
//! });
//!
//! if let Err(e) = handle_args(std::env::args_os(), &pcd, Some("root")) {
//!     eprintln!("{}", e);
//!     std::process::exit(1);
//! }
//! ```

use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::{Result, RunsheetError};
use crate::procedure::Procedure;

#[derive(Debug, Parser)]
struct ProcedureArgs {
    /// Print the step's Markdown documentation instead of walking through it
    #[arg(long)]
    markdown: bool,

    /// Absolute name of the step, e.g. root.deploy
    #[arg(value_name = "STEP_NAME")]
    step: Option<String>,
}

/// Default command-line interface for a single procedure.
pub struct DefaultCli<'p> {
    exec_name: String,
    procedure: &'p Procedure,
    default_step: Option<String>,
}

impl<'p> DefaultCli<'p> {
    /// Create the interface. The procedure is validated up front.
    ///
    /// `default_step` is used when no `STEP_NAME` is given; without one a
    /// step name is mandatory.
    pub fn new(
        exec_name: impl Into<String>,
        procedure: &'p Procedure,
        default_step: Option<&str>,
    ) -> Result<Self> {
        procedure.check()?;
        Ok(Self {
            exec_name: exec_name.into(),
            procedure,
            default_step: default_step.map(str::to_string),
        })
    }

    /// Full help text, headed by the procedure title.
    pub fn usage(&self) -> String {
        self.command().render_help().to_string()
    }

    /// Handle arguments on standard input and output.
    ///
    /// `args` includes the program name, as in [`std::env::args_os`].
    pub fn run<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(args, stdin.lock(), stdout.lock())
    }

    /// Handle arguments on the given streams.
    ///
    /// `--help` prints the help and succeeds. Malformed arguments print the
    /// help and fail with [`RunsheetError::Usage`].
    pub fn run_with<I, T, R, W>(&self, args: I, input: R, mut output: W) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        R: BufRead,
        W: Write,
    {
        let matches = match self.command().try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                write!(output, "{}", self.usage())?;
                return Ok(());
            }
            Err(e) => return self.usage_error(&mut output, e.to_string()),
        };
        let args = match ProcedureArgs::from_arg_matches(&matches) {
            Ok(args) => args,
            Err(e) => return self.usage_error(&mut output, e.to_string()),
        };

        let Some(step) = args.step.or_else(|| self.default_step.clone()) else {
            return self.usage_error(&mut output, "Must specify STEP_NAME".to_string());
        };

        tracing::debug!(
            "{}: step '{}', markdown={}",
            self.exec_name,
            step,
            args.markdown
        );
        if args.markdown {
            self.procedure.render_step(&mut output, &step)
        } else {
            self.procedure.execute_step_with(&step, input, output)
        }
    }

    fn command(&self) -> clap::Command {
        let mut cmd = ProcedureArgs::command()
            .name(self.exec_name.clone())
            .bin_name(self.exec_name.clone());
        if !self.procedure.title().is_empty() {
            cmd = cmd.about(self.procedure.title().to_string());
        }
        if let Some(default) = &self.default_step {
            cmd = cmd.after_help(format!("STEP_NAME defaults to '{}'.", default));
        }
        cmd
    }

    fn usage_error<W: Write>(&self, output: &mut W, message: String) -> Result<()> {
        write!(output, "{}", self.usage())?;
        Err(RunsheetError::Usage {
            message: message.trim_end().to_string(),
        })
    }
}

/// Handle a program's arguments for the given procedure.
///
/// The first argument is the program path; its file name becomes the
/// executable name shown in the help.
pub fn handle_args<I, T>(args: I, procedure: &Procedure, default_step: Option<&str>) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let exec_name = args
        .first()
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| RunsheetError::Usage {
            message: "Failed to determine the executable name".to_string(),
        })?;

    DefaultCli::new(exec_name, procedure, default_step)?.run(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::PROMPT;

    fn procedure() -> Procedure {
        let mut pcd = Procedure::new();
        pcd.short("Rotate the key");
        pcd.add_step(|s| {
            s.name("generate").short("Generate a new key");
        });
        pcd
    }

    fn run(cli: &DefaultCli<'_>, args: &[&str], input: &[u8]) -> (Result<()>, String) {
        let mut output = Vec::new();
        let result = cli.run_with(args.iter().copied(), input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn help_succeeds_and_names_the_procedure() {
        let pcd = procedure();
        let cli = DefaultCli::new("rotate", &pcd, None).unwrap();
        for flag in ["--help", "-h"] {
            let (result, output) = run(&cli, &["rotate", flag], b"");
            assert!(result.is_ok());
            assert!(output.contains("Rotate the key"));
            assert!(output.contains("Usage: rotate [OPTIONS] [STEP_NAME]"));
        }
    }

    #[test]
    fn markdown_renders_named_step() {
        let pcd = procedure();
        let cli = DefaultCli::new("rotate", &pcd, None).unwrap();
        let (result, output) = run(&cli, &["rotate", "--markdown", "root.generate"], b"");
        assert!(result.is_ok());
        assert_eq!(output, "## (0) Generate a new key\n");
    }

    #[test]
    fn default_step_is_used() {
        let pcd = procedure();
        let cli = DefaultCli::new("rotate", &pcd, Some("root")).unwrap();
        let (result, output) = run(&cli, &["rotate", "--markdown"], b"");
        assert!(result.is_ok());
        assert!(output.starts_with("# Rotate the key\n"));
    }

    #[test]
    fn walks_named_step() {
        let pcd = procedure();
        let cli = DefaultCli::new("rotate", &pcd, None).unwrap();
        let (result, output) = run(&cli, &["rotate", "root.generate"], b"\n");
        assert!(result.is_ok());
        assert_eq!(
            output,
            format!("## (0) Generate a new key{}\nDone.\n", PROMPT)
        );
    }

    #[test]
    fn missing_step_without_default_is_usage_error() {
        let pcd = procedure();
        let cli = DefaultCli::new("rotate", &pcd, None).unwrap();
        for args in [&["rotate"][..], &["rotate", "--markdown"][..]] {
            let (result, output) = run(&cli, args, b"");
            assert!(matches!(result, Err(RunsheetError::Usage { .. })));
            assert!(output.contains("Usage: rotate"));
        }
    }

    #[test]
    fn bad_arguments_are_usage_errors() {
        let pcd = procedure();
        let cli = DefaultCli::new("rotate", &pcd, Some("root")).unwrap();
        for args in [
            &["rotate", "--nonexistent-flag"][..],
            &["rotate", "too", "many", "args"][..],
        ] {
            let (result, output) = run(&cli, args, b"");
            assert!(matches!(result, Err(RunsheetError::Usage { .. })));
            assert!(output.contains("Usage: rotate"));
        }
    }

    #[test]
    fn unknown_step_is_reported() {
        let pcd = procedure();
        let cli = DefaultCli::new("rotate", &pcd, None).unwrap();
        let (result, _) = run(&cli, &["rotate", "--markdown", "root.nope"], b"");
        assert!(matches!(result, Err(RunsheetError::StepNotFound { .. })));
    }

    #[test]
    fn invalid_procedure_is_rejected_up_front() {
        let mut pcd = procedure();
        pcd.add_step(|s| {
            s.name("generate").short("Again");
        });
        let err = DefaultCli::new("rotate", &pcd, None).err().unwrap();
        assert_eq!(err.problems().len(), 1);
    }

    #[test]
    fn handle_args_rejects_empty_arguments() {
        let pcd = procedure();
        let result = handle_args(Vec::<OsString>::new(), &pcd, None);
        assert!(matches!(result, Err(RunsheetError::Usage { .. })));
    }
}
