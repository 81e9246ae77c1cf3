//! Markdown documentation rendering.
//!
//! A procedure (or any subtree of it) renders to one Markdown document:
//! a numbered section per step in depth-first order, each with an up-link
//! to its parent section, its body, its inputs and outputs, and, for the
//! root, a table of contents.
//!
//! # Example
//!
//! ```
//! use runsheet::Procedure;
//!
//! let mut pcd = Procedure::new();
//! pcd.short("Restart the cache");
//! pcd.add_step(|step| {
//!     step.name("drain").short("Drain traffic");
//! });
//!
//! let mut out = Vec::new();
//! pcd.render(&mut out).unwrap();
//! let markdown = String::from_utf8(out).unwrap();
//! assert!(markdown.starts_with("# Restart the cache\n\n- [Drain traffic](#0-drain-traffic)"));
//! ```

mod anchor;
pub mod doc;
pub mod markdown;

pub use anchor::anchor;
pub use doc::StepDoc;

use crate::procedure::Step;

/// Stand-in for a literal backtick in rendered text.
///
/// Every occurrence in the finished output, including ones written by
/// authors in step bodies, becomes a single backtick.
pub const BACKTICK_ESCAPE: &str = "@@";

/// Render a step and its descendants as a Markdown document.
///
/// The caller is responsible for validating the procedure first.
pub fn document(step: Step<'_>) -> String {
    let doc = StepDoc::tree(step);
    let mut out = String::new();
    markdown::step(&doc, &mut out);
    out.push('\n');
    tracing::debug!("Rendered '{}' ({} bytes)", doc.step_name, out.len());
    unescape_backticks(&out)
}

/// The section shown for a step while walking a procedure.
pub fn exec_section(step: Step<'_>) -> String {
    let mut out = String::new();
    markdown::exec_step(&StepDoc::single(step), &mut out);
    unescape_backticks(&out)
}

/// Replace every [`BACKTICK_ESCAPE`] with a backtick.
pub fn unescape_backticks(text: &str) -> String {
    text.replace(BACKTICK_ESCAPE, "`")
}
