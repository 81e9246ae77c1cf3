//! Procedure consistency checking.
//!
//! [`check_procedure`] walks the step tree once and reports every
//! [`Problem`] it finds:
//!
//! 1. Every step has a name, and no absolute name ends with the separator.
//! 2. No two steps share an absolute name.
//! 3. Every step has a short description.
//! 4. Every input names an output declared by a step that comes earlier in
//!    depth-first order, with the same type.
//! 5. No two output declarations share a name.
//!
//! Outputs only become visible to inputs once the walk has passed the
//! step declaring them, so a step can never consume its own outputs.

pub mod output;

pub use output::{HumanFormatter, JsonFormatter, OutputFormat, ProblemFormatter};

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::procedure::{OutputDef, Procedure, Visit, NAME_SEPARATOR};

/// The kind of consistency problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemKind {
    /// A step was never given a name.
    MissingName,
    /// Two steps share an absolute name.
    DuplicateName,
    /// A step has no short description.
    MissingShort,
    /// An input refers to no earlier output.
    DanglingInput,
    /// An input's type differs from the output it refers to.
    TypeMismatch,
    /// Two outputs share a name.
    DuplicateOutput,
}

impl ProblemKind {
    /// Stable identifier, e.g. `dangling-input`.
    pub fn id(&self) -> &'static str {
        match self {
            ProblemKind::MissingName => "missing-name",
            ProblemKind::DuplicateName => "duplicate-name",
            ProblemKind::MissingShort => "missing-short",
            ProblemKind::DanglingInput => "dangling-input",
            ProblemKind::TypeMismatch => "type-mismatch",
            ProblemKind::DuplicateOutput => "duplicate-output",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A single consistency problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// What went wrong.
    pub kind: ProblemKind,
    /// Absolute name of the step the problem was found on.
    pub step: String,
    /// Human-readable description.
    pub message: String,
}

impl Problem {
    /// Create a new problem.
    pub fn new(kind: ProblemKind, step: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            step: step.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Check a procedure, returning every problem in traversal order.
pub fn check_procedure(procedure: &Procedure) -> Vec<Problem> {
    let mut seen_names: HashSet<String> = HashSet::new();
    // Output name -> (declaring step, declaration), in walk order.
    let mut outputs: HashMap<&str, (String, &OutputDef)> = HashMap::new();
    let mut problems = Vec::new();

    let walked = procedure.root().walk(|step| {
        let abs_name = step.absolute_name();

        if step.name().is_empty() || abs_name.ends_with(NAME_SEPARATOR) {
            let message = match step.parent() {
                None => "Root step does not have name".to_string(),
                Some(parent) => format!(
                    "Child step of '{}' does not have name",
                    parent.absolute_name()
                ),
            };
            problems.push(Problem::new(ProblemKind::MissingName, &abs_name, message));
        }

        if !seen_names.insert(abs_name.clone()) {
            problems.push(Problem::new(
                ProblemKind::DuplicateName,
                &abs_name,
                format!("More than one step with name '{}'", abs_name),
            ));
        }

        if step.short().is_empty() {
            problems.push(Problem::new(
                ProblemKind::MissingShort,
                &abs_name,
                format!("Step '{}' has no short description", abs_name),
            ));
        }

        for input in step.inputs() {
            match outputs.get(input.name.as_str()) {
                None => problems.push(Problem::new(
                    ProblemKind::DanglingInput,
                    &abs_name,
                    format!(
                        "Input '{}' of step '{}' does not refer to an output from any previous step",
                        input.name, abs_name
                    ),
                )),
                Some((_, output)) if output.value_type != input.value_type => {
                    problems.push(Problem::new(
                        ProblemKind::TypeMismatch,
                        &abs_name,
                        format!(
                            "Input '{}' of step '{}' has type '{}', but output '{}' has type '{}'",
                            input.name, abs_name, input.value_type, output.name, output.value_type
                        ),
                    ))
                }
                Some(_) => {}
            }
        }

        for output in step.outputs() {
            if let Some((declared_by, _)) = outputs.get(output.name.as_str()) {
                problems.push(Problem::new(
                    ProblemKind::DuplicateOutput,
                    &abs_name,
                    format!(
                        "Output '{}' of step '{}' was already declared by step '{}'",
                        output.name, abs_name, declared_by
                    ),
                ));
            }
            outputs.insert(output.name.as_str(), (abs_name.clone(), output));
        }

        Ok::<_, std::convert::Infallible>(Visit::Continue)
    });
    if let Err(never) = walked {
        match never {}
    }

    tracing::debug!("Checked procedure: {} problem(s)", problems.len());
    problems
}
