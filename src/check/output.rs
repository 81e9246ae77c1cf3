//! Problem output formatters.
//!
//! Formats validation problems for people or for tooling.

use serde::Serialize;
use std::io::Write;

use super::Problem;

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting problems.
pub trait ProblemFormatter {
    /// Format problems to the given writer.
    fn format<W: Write>(&self, problems: &[Problem], writer: &mut W) -> std::io::Result<()>;
}

/// Formats problems for terminal display.
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ProblemFormatter for HumanFormatter {
    fn format<W: Write>(&self, problems: &[Problem], writer: &mut W) -> std::io::Result<()> {
        for problem in problems {
            // Header line: error[kind]: message
            writeln!(writer, "error[{}]: {}", problem.kind, problem.message)?;
            writeln!(writer, "  --> {}", problem.step)?;
            writeln!(writer)?;
        }

        if problems.is_empty() {
            writeln!(writer, "No problems found")?;
        } else {
            writeln!(writer, "Found {} problem(s)", problems.len())?;
        }

        Ok(())
    }
}

/// Formats problems as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    problems: &'a [Problem],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ProblemFormatter for JsonFormatter {
    fn format<W: Write>(&self, problems: &[Problem], writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            problems,
            summary: JsonSummary {
                total: problems.len(),
            },
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
