//! Fact declarations.
//!
//! A fact is a named, typed value that a step either requires
//! ([`InputDef`]) or produces ([`OutputDef`]). Declarations are pure data:
//! they drive validation and documentation, never runtime values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scalar kinds a fact can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Int,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => write!(f, "string"),
            ValueType::Int => write!(f, "int"),
        }
    }
}

/// A value a step consumes.
///
/// The name must match an output declared by a step that comes earlier in
/// the procedure's depth-first order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputDef {
    /// Type of the value.
    #[serde(rename = "type")]
    pub value_type: ValueType,

    /// Name of the output this input refers to.
    pub name: String,

    /// Whether the step needs this input.
    #[serde(default = "default_true")]
    pub required: bool,
}

impl InputDef {
    pub fn new(value_type: ValueType, name: impl Into<String>, required: bool) -> Self {
        Self {
            value_type,
            name: name.into(),
            required,
        }
    }
}

/// A value a step produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputDef {
    /// Type of the value.
    #[serde(rename = "type")]
    pub value_type: ValueType,

    /// Name of the output, unique across the procedure.
    pub name: String,

    /// Concise description, used in rendered documentation.
    pub short: String,
}

impl OutputDef {
    pub fn new(value_type: ValueType, name: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            value_type,
            name: name.into(),
            short: short.into(),
        }
    }
}

fn default_true() -> bool {
    true
}
