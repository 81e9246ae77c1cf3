//! Procedures and their step trees.
//!
//! A [`Procedure`] is a tree of named steps rooted at an implicit `root`
//! step. Authors build it through the builder API and then check, render
//! or execute it.
//!
//! # Example
//!
//! ```
//! use runsheet::Procedure;
//!
//! let mut pcd = Procedure::new();
//! pcd.short("Rotate the API key");
//! pcd.add_step(|step| {
//!     step.name("generate")
//!         .short("Generate a new key")
//!         .output_string("apiKey", "The new key");
//! });
//! pcd.add_step(|step| {
//!     step.name("deploy")
//!         .short("Deploy the new key")
//!         .input_string("apiKey", true);
//! });
//!
//! assert!(pcd.check().is_ok());
//! assert_eq!(pcd.step_by_name("root.deploy").unwrap().depth(), 1);
//! ```

pub mod fact;
pub mod step;
pub mod text;

pub use fact::{InputDef, OutputDef, ValueType};
pub use step::{Step, StepBuilder, StepId, StepTree, Visit, NAME_SEPARATOR, ROOT_NAME};
pub use text::{normalize_long, trim_common_indent};

use std::io::{self, BufRead, Write};

use crate::check::{check_procedure, Problem};
use crate::error::{Result, RunsheetError};
use crate::render;
use crate::walker::Walker;

/// A sequence of steps that can be validated, rendered to Markdown, or
/// walked through interactively.
#[derive(Debug, Clone, Default)]
pub struct Procedure {
    tree: StepTree,
}

impl Procedure {
    /// Create an empty procedure, ready to be given steps.
    pub fn new() -> Self {
        Self {
            tree: StepTree::new(),
        }
    }

    /// Set the procedure's title, which becomes the document title.
    pub fn short(&mut self, short: impl Into<String>) -> &mut Self {
        self.root_builder().short(short);
        self
    }

    /// Set the procedure's overview text.
    ///
    /// It opens the rendered document and is shown first when executing.
    pub fn long(&mut self, long: impl AsRef<str>) -> &mut Self {
        self.root_builder().long(long);
        self
    }

    /// Add a top-level step, configured by `configure`.
    pub fn add_step<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut StepBuilder<'_>),
    {
        self.root_builder().add_step(configure);
        self
    }

    /// The procedure's title.
    pub fn title(&self) -> &str {
        self.root().short()
    }

    /// The root step.
    pub fn root(&self) -> Step<'_> {
        self.tree.root()
    }

    /// The underlying step tree.
    pub fn tree(&self) -> &StepTree {
        &self.tree
    }

    /// Look up a step by absolute name, e.g. `root.deploy.verify`.
    pub fn step_by_name(&self, name: &str) -> Result<Step<'_>> {
        let mut found = None;
        self.root().walk(|step| {
            if step.absolute_name() == name {
                found = Some(step);
                return Ok::<_, RunsheetError>(Visit::Stop);
            }
            Ok(Visit::Continue)
        })?;

        tracing::debug!("Looked up step '{}': found={}", name, found.is_some());
        found.ok_or_else(|| RunsheetError::StepNotFound {
            name: name.to_string(),
        })
    }

    /// Validate the procedure.
    ///
    /// Returns [`RunsheetError::InvalidProcedure`] carrying every problem
    /// found when the procedure is inconsistent.
    pub fn check(&self) -> Result<()> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(RunsheetError::InvalidProcedure { problems })
        }
    }

    /// All consistency problems in the procedure, in traversal order.
    pub fn problems(&self) -> Vec<Problem> {
        check_procedure(self)
    }

    /// Write the whole procedure as Markdown.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        self.render_step(out, ROOT_NAME)
    }

    /// Write the subtree rooted at the named step as Markdown.
    ///
    /// The procedure is validated first; nothing is written if it is invalid
    /// or the step does not exist.
    pub fn render_step<W: Write>(&self, out: &mut W, name: &str) -> Result<()> {
        self.check()?;
        let step = self.step_by_name(name)?;
        out.write_all(render::document(step).as_bytes())?;
        Ok(())
    }

    /// Walk through the whole procedure on standard input and output.
    pub fn execute(&self) -> Result<()> {
        self.execute_step(ROOT_NAME)
    }

    /// Walk through the named step's subtree on standard input and output.
    pub fn execute_step(&self, name: &str) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.execute_step_with(name, stdin.lock(), stdout.lock())
    }

    /// Walk through the named step's subtree on the given streams.
    ///
    /// The whole procedure is validated first, even when only a subtree is
    /// walked.
    pub fn execute_step_with<R: BufRead, W: Write>(
        &self,
        name: &str,
        input: R,
        output: W,
    ) -> Result<()> {
        Walker::new(self, input, output).run(name)
    }

    fn root_builder(&mut self) -> StepBuilder<'_> {
        let root = self.tree.root_id();
        self.tree.builder(root)
    }
}
