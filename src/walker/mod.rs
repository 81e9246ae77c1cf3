//! Interactive procedure walking.
//!
//! The [`Walker`] presents one step at a time (heading and body only) and
//! then waits for the operator:
//!
//! - an empty line proceeds to the next step in depth-first order
//! - `skip` leaves out the current step's descendants
//! - `skipto STEP` fast-forwards to the step with that absolute name,
//!   announcing each step passed on the way
//! - `help` lists these options
//!
//! Anything else is rejected and the operator is asked again.

pub mod command;

pub use command::{OperatorCommand, HELP, PROMPT};

use std::io::{BufRead, Write};

use crate::error::{Result, RunsheetError};
use crate::procedure::{Procedure, Step, Visit};
use crate::render;

/// Walks a procedure on an input and an output stream.
pub struct Walker<'p, R, W> {
    procedure: &'p Procedure,
    input: R,
    output: W,
    skip_to: Option<String>,
}

impl<'p, R: BufRead, W: Write> Walker<'p, R, W> {
    /// Create a walker reading operator responses from `input` and writing
    /// steps to `output`.
    pub fn new(procedure: &'p Procedure, input: R, output: W) -> Self {
        Self {
            procedure,
            input,
            output,
            skip_to: None,
        }
    }

    /// Walk the subtree rooted at the named step.
    ///
    /// The whole procedure is validated before anything is shown. The walk
    /// ends with `Done.` unless the input stream breaks first.
    pub fn run(mut self, name: &str) -> Result<()> {
        let procedure = self.procedure;
        procedure.check()?;
        let start = procedure.step_by_name(name)?;

        start.walk(|step| self.visit(step))?;

        if let Some(target) = &self.skip_to {
            tracing::warn!("Never reached step '{}' while skipping", target);
        }
        writeln!(self.output, "Done.")?;
        self.output.flush()?;
        Ok(())
    }

    fn visit(&mut self, step: Step<'_>) -> Result<Visit> {
        let abs_name = step.absolute_name();

        if let Some(target) = self.skip_to.take() {
            if abs_name != target {
                writeln!(
                    self.output,
                    "Skipping step '{}' on the way to '{}'",
                    abs_name, target
                )?;
                self.skip_to = Some(target);
                return Ok(Visit::Continue);
            }
        }

        tracing::debug!("Presenting step '{}'", abs_name);
        write!(self.output, "{}", render::exec_section(step))?;

        loop {
            match self.prompt()? {
                OperatorCommand::Proceed => return Ok(Visit::Continue),
                OperatorCommand::Help => write!(self.output, "{}", HELP)?,
                OperatorCommand::Skip => {
                    writeln!(
                        self.output,
                        "Skipping step '{}' and its descendants",
                        abs_name
                    )?;
                    return Ok(Visit::SkipChildren);
                }
                OperatorCommand::SkipTo(target) => {
                    tracing::debug!("Skipping from '{}' to '{}'", abs_name, target);
                    self.skip_to = Some(target);
                    return Ok(Visit::Continue);
                }
                OperatorCommand::MalformedSkipTo => writeln!(
                    self.output,
                    "Invalid 'skipto' syntax; enter \"help\" for help"
                )?,
                OperatorCommand::Invalid(_) => {
                    writeln!(self.output, "Invalid choice; enter \"help\" for help")?
                }
            }
        }
    }

    /// Ask until a line is read. Lines that are not UTF-8 are reported and
    /// asked again; a closed or broken stream ends the walk.
    ///
    /// Interrupted reads never surface here, `read_until` retries them.
    fn prompt(&mut self) -> Result<OperatorCommand> {
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = Vec::new();
            let read = self.input.read_until(b'\n', &mut line);
            writeln!(self.output)?;

            if read? == 0 {
                return Err(RunsheetError::InputClosed);
            }
            match String::from_utf8(line) {
                Ok(line) => return Ok(OperatorCommand::parse(&line)),
                Err(e) => writeln!(self.output, "Error reading input: {}", e)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Cursor, Read};

    /// Reader that fails with the given error kind once, then reads `data`.
    struct FailsOnce {
        kind: Option<io::ErrorKind>,
        data: Cursor<Vec<u8>>,
    }

    impl FailsOnce {
        fn new(kind: io::ErrorKind, data: &[u8]) -> Self {
            Self {
                kind: Some(kind),
                data: Cursor::new(data.to_vec()),
            }
        }
    }

    impl Read for FailsOnce {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.kind.take() {
                Some(kind) => Err(io::Error::new(kind, "stream hiccup")),
                None => self.data.read(buf),
            }
        }
    }

    fn walk(pcd: &Procedure, name: &str, input: &[u8]) -> (Result<()>, String) {
        let mut output = Vec::new();
        let result = Walker::new(pcd, Cursor::new(input.to_vec()), &mut output).run(name);
        (result, String::from_utf8(output).unwrap())
    }

    fn linear(names: &[&str]) -> Procedure {
        let mut pcd = Procedure::new();
        pcd.short("Linear");
        for name in names {
            pcd.add_step(|s| {
                s.name(*name).short(format!("Do {}", name));
            });
        }
        pcd
    }

    #[test]
    fn single_step_prompts_then_finishes() {
        let mut pcd = Procedure::new();
        pcd.short("root step");
        pcd.long("blah blah blah\n\nthis is @@all@@ very interesting to you");

        let (result, output) = walk(&pcd, "root", b"\n");
        assert!(result.is_ok());
        assert_eq!(
            output,
            format!(
                "# root step\n\nblah blah blah\n\nthis is `all` very interesting to you{}\nDone.\n",
                PROMPT
            )
        );
    }

    #[test]
    fn nested_steps_are_presented_in_order() {
        let mut pcd = Procedure::new();
        pcd.short("short 0").long("long 0");
        pcd.add_step(|s| {
            s.name("childStep").short("short 1").long("long 1");
            s.add_step(|s| {
                s.name("grandchildStep").short("short 2").long("long 2");
            });
        });

        let (result, output) = walk(&pcd, "root", b"\n\n\n");
        assert!(result.is_ok());
        let sections: Vec<&str> = output.split(PROMPT).collect();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0], "# short 0\n\nlong 0");
        assert_eq!(sections[1], "\n## (0) short 1\n\nlong 1");
        assert_eq!(sections[2], "\n### (0.0) short 2\n\nlong 2");
        assert_eq!(sections[3], "\nDone.\n");
    }

    #[test]
    fn fact_blocks_are_not_shown() {
        let mut pcd = Procedure::new();
        pcd.short("Facts");
        pcd.add_step(|s| {
            s.name("make").short("Make").output_string("thing", "A thing");
        });
        let (_, output) = walk(&pcd, "root", b"\n\n");
        assert!(!output.contains("**Outputs**"));
    }

    #[test]
    fn skip_leaves_out_descendants() {
        let mut pcd = Procedure::new();
        pcd.short("Skipping");
        pcd.add_step(|s| {
            s.name("one").short("One");
            s.add_step(|c| {
                c.name("oneA").short("One A");
            });
            s.add_step(|c| {
                c.name("oneB").short("One B");
            });
        });
        pcd.add_step(|s| {
            s.name("two").short("Two");
        });
        pcd.add_step(|s| {
            s.name("three").short("Three");
        });

        let (result, output) = walk(&pcd, "root", b"\nskip\n\n\n");
        assert!(result.is_ok());
        assert!(output.contains("Skipping step 'root.one' and its descendants\n## (1) Two"));
        assert!(!output.contains("One A"));
        assert!(!output.contains("One B"));
        assert!(output.contains("## (2) Three"));
        assert!(output.ends_with("Done.\n"));
    }

    #[test]
    fn skipto_announces_passed_steps() {
        let pcd = linear(&["stepA", "stepB", "stepC", "stepD"]);

        let (result, output) = walk(&pcd, "root", b"\nskipto root.stepC\n\n\n");
        assert!(result.is_ok());
        assert!(output.contains("## (0) Do stepA"));
        assert!(output.contains(
            "Skipping step 'root.stepB' on the way to 'root.stepC'\n## (2) Do stepC"
        ));
        assert!(!output.contains("## (1) Do stepB"));
        assert!(output.contains("## (3) Do stepD"));
        assert_eq!(output.matches(PROMPT).count(), 4);
    }

    #[test]
    fn skipto_visits_descendants_of_passed_steps() {
        let mut pcd = Procedure::new();
        pcd.short("Deep");
        pcd.add_step(|s| {
            s.name("a").short("A");
        });
        pcd.add_step(|s| {
            s.name("b").short("B").add_step(|c| {
                c.name("target").short("Target");
            });
        });

        let (_, output) = walk(&pcd, "root", b"skipto root.b.target\n\n");
        assert!(output.contains("Skipping step 'root.a' on the way to 'root.b.target'"));
        assert!(output.contains("Skipping step 'root.b' on the way to 'root.b.target'"));
        assert!(output.contains("### (1.0) Target"));
    }

    #[test]
    fn unreached_skipto_target_skips_to_the_end() {
        let pcd = linear(&["a", "b"]);
        let (result, output) = walk(&pcd, "root", b"skipto root.nowhere\n");
        assert!(result.is_ok());
        assert!(output.contains("Skipping step 'root.b' on the way to 'root.nowhere'\nDone.\n"));
    }

    #[test]
    fn help_and_bad_input_reprompt_without_advancing() {
        let pcd = linear(&["a"]);
        let (result, output) = walk(&pcd, "root", b"help\nbogus\nskipto\nskipto x y\n\n\n");
        assert!(result.is_ok());
        assert!(output.contains(HELP));
        assert!(output.contains("Invalid choice; enter \"help\" for help\n"));
        assert_eq!(
            output
                .matches("Invalid 'skipto' syntax; enter \"help\" for help\n")
                .count(),
            2
        );
        // Root asked five times, step a once.
        assert_eq!(output.matches(PROMPT).count(), 6);
        assert_eq!(output.matches("## (0) Do a").count(), 1);
    }

    #[test]
    fn closed_input_aborts_walk() {
        let pcd = linear(&["a", "b"]);
        let (result, output) = walk(&pcd, "root", b"\n");
        assert!(matches!(result, Err(RunsheetError::InputClosed)));
        assert!(!output.contains("Done."));
    }

    #[test]
    fn undecodable_line_is_reported_and_retried() {
        let pcd = linear(&[]);
        let (result, output) = walk(&pcd, "root", b"\xff\xfe\n\n");
        assert!(result.is_ok());
        assert!(output.contains("Error reading input: "));
        assert!(output.ends_with("Done.\n"));
    }

    #[test]
    fn walking_a_subtree_still_checks_everything() {
        let mut pcd = linear(&["a"]);
        pcd.add_step(|s| {
            s.name("broken");
        });
        let (result, output) = walk(&pcd, "root.a", b"\n");
        let err = result.unwrap_err();
        assert_eq!(err.problems().len(), 1);
        assert!(output.is_empty());
    }

    #[test]
    fn walking_a_subtree_starts_at_that_step() {
        let pcd = linear(&["a", "b"]);
        let (result, output) = walk(&pcd, "root.b", b"\n");
        assert!(result.is_ok());
        assert!(output.starts_with("## (1) Do b"));
        assert!(!output.contains("Do a"));
    }

    #[test]
    fn unknown_start_step_is_an_error() {
        let pcd = linear(&["a"]);
        let (result, _) = walk(&pcd, "root.zzz", b"\n");
        assert!(matches!(result, Err(RunsheetError::StepNotFound { .. })));
    }

    #[test]
    fn interrupted_read_is_retried_silently() {
        let pcd = linear(&[]);
        let mut output = Vec::new();
        let input = BufReader::new(FailsOnce::new(io::ErrorKind::Interrupted, b"\n"));
        let result = Walker::new(&pcd, input, &mut output).run("root");

        assert!(result.is_ok());
        let output = String::from_utf8(output).unwrap();
        assert!(!output.contains("Error reading input"));
        assert_eq!(output.matches(PROMPT).count(), 1);
        assert!(output.ends_with("Done.\n"));
    }

    #[test]
    fn broken_stream_aborts_walk() {
        let pcd = linear(&["a"]);
        let mut output = Vec::new();
        let input = BufReader::new(FailsOnce::new(io::ErrorKind::BrokenPipe, b"\n\n"));
        let result = Walker::new(&pcd, input, &mut output).run("root");

        match result {
            Err(RunsheetError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!String::from_utf8(output).unwrap().contains("Done."));
    }
}
