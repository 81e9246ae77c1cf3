//! Per-step document projection.
//!
//! A [`StepDoc`] captures everything the Markdown fragments need to know
//! about a step, so rendering never has to reach back into the tree.

use crate::procedure::{InputDef, OutputDef, Step};

use super::anchor::anchor;

/// Renderable view of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDoc {
    /// Depth of the step in the whole procedure.
    pub depth: usize,
    /// Position of the step in the whole procedure.
    pub pos: Vec<usize>,
    /// Absolute name of the step.
    pub step_name: String,
    /// The step's short description.
    pub title: String,
    /// The step's long description.
    pub body: String,
    pub inputs: Vec<InputDef>,
    pub outputs: Vec<OutputDef>,
    /// Anchor of the enclosing section, if it is part of the document.
    pub parent_anchor: Option<String>,
    /// Child projections; empty unless built recursively.
    pub children: Vec<StepDoc>,
}

impl StepDoc {
    /// Project a single step without its children.
    pub fn single(step: Step<'_>) -> Self {
        Self {
            depth: step.depth(),
            pos: step.pos(),
            step_name: step.absolute_name(),
            title: step.short().to_string(),
            body: step.long().to_string(),
            inputs: step.inputs().to_vec(),
            outputs: step.outputs().to_vec(),
            parent_anchor: None,
            children: Vec::new(),
        }
    }

    /// Project a step and its whole subtree.
    ///
    /// The top projection has no parent anchor even when the step has a
    /// parent, since that parent's section is not part of the document.
    pub fn tree(step: Step<'_>) -> Self {
        Self::tree_under(step, None)
    }

    fn tree_under(step: Step<'_>, parent_anchor: Option<String>) -> Self {
        let mut doc = Self::single(step);
        doc.parent_anchor = parent_anchor;
        let own_anchor = doc.anchor();
        doc.children = step
            .children()
            .map(|child| Self::tree_under(child, Some(own_anchor.clone())))
            .collect();
        doc
    }

    /// Heading line for the step's section, e.g. `## (0.2) Restart the service`.
    ///
    /// The root's heading has no position.
    pub fn section_header(&self) -> String {
        let mut parts = vec!["#".repeat(self.depth + 1)];
        if self.depth > 0 {
            parts.push(format!("({})", self.position()));
        }
        parts.push(self.title.clone());
        parts.join(" ")
    }

    /// Link target of the step's section.
    pub fn anchor(&self) -> String {
        anchor(&self.section_header())
    }

    /// Indentation of the step's table-of-contents entry.
    pub fn toc_indent(&self) -> String {
        "    ".repeat(self.depth.saturating_sub(1))
    }

    /// Dot-separated position, empty for the root.
    pub fn position(&self) -> String {
        self.pos
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }
}
