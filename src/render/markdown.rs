//! Markdown fragments.
//!
//! Each fragment appends one block of the document to a buffer and never
//! ends it with a newline; callers own the spacing between blocks.
//! Literal backticks are written as [`BACKTICK_ESCAPE`] and substituted
//! once the whole document is assembled.

use crate::procedure::{InputDef, OutputDef};

use super::doc::StepDoc;
use super::BACKTICK_ESCAPE;

/// A step's section followed by the sections of its descendants.
pub fn step(doc: &StepDoc, out: &mut String) {
    out.push_str(&doc.section_header());

    if let Some(parent_anchor) = &doc.parent_anchor {
        out.push_str("\n\n");
        out.push_str(&code(&doc.step_name));
        out.push_str("\n•\n");
        out.push_str(&format!("[Up]({})", parent_anchor));
    }

    if !doc.body.is_empty() {
        out.push_str("\n\n");
        out.push_str(&doc.body);
    }

    if !doc.inputs.is_empty() {
        out.push_str("\n\n");
        inputs(&doc.inputs, out);
    }

    if !doc.outputs.is_empty() {
        out.push_str("\n\n");
        outputs(&doc.outputs, out);
    }

    // The root always gets a table-of-contents block, even an empty one.
    if doc.depth == 0 {
        out.push_str("\n\n");
        table_of_contents(&doc.children, out);
    }

    for child in &doc.children {
        out.push_str("\n\n");
        step(child, out);
    }
}

/// The heading and body of a single step, as shown while executing.
pub fn exec_step(doc: &StepDoc, out: &mut String) {
    out.push_str(&doc.section_header());
    if !doc.body.is_empty() {
        out.push_str("\n\n");
        out.push_str(&doc.body);
    }
}

/// The `**Inputs**:` list. Inputs are listed by name only.
pub fn inputs(inputs: &[InputDef], out: &mut String) {
    if inputs.is_empty() {
        return;
    }
    out.push_str("**Inputs**:\n");
    for input in inputs {
        out.push_str(&format!("\n  - {}", code(&input.name)));
    }
}

/// The `**Outputs**:` list of `name (type): description` entries.
pub fn outputs(outputs: &[OutputDef], out: &mut String) {
    if outputs.is_empty() {
        return;
    }
    out.push_str("**Outputs**:\n");
    for output in outputs {
        out.push_str(&format!(
            "\n  - {} ({}): {}",
            code(&output.name),
            output.value_type,
            output.short
        ));
    }
}

/// Nested bullet list linking to every step below the root.
pub fn table_of_contents(children: &[StepDoc], out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        out.push_str(&format!(
            "{}- [{}]({})",
            child.toc_indent(),
            child.title,
            child.anchor()
        ));
        if !child.children.is_empty() {
            out.push('\n');
            table_of_contents(&child.children, out);
        }
        if i + 1 < children.len() {
            out.push('\n');
        }
    }
}

fn code(text: &str) -> String {
    format!("{0}{1}{0}", BACKTICK_ESCAPE, text)
}
