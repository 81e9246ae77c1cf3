//! Procedure definition schema.
//!
//! These structs map to the YAML procedure definition format:
//!
//! ```yaml
//! short: Rotate the API key
//! long: |
//!   Run this whenever the key may have leaked.
//! steps:
//!   - name: generate
//!     short: Generate a new key
//!     outputs:
//!       - { name: apiKey, type: string, short: The new key }
//!   - name: deploy
//!     short: Deploy the new key
//!     inputs:
//!       - { name: apiKey, type: string }
//! ```

use serde::{Deserialize, Serialize};

use crate::procedure::{InputDef, OutputDef, Procedure, StepBuilder};

/// Root of a procedure definition file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcedureConfig {
    /// Procedure title.
    pub short: String,

    /// Overview text.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub long: String,

    /// Top-level steps, in execution order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepConfig>,
}

/// One step of a procedure definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StepConfig {
    /// Step name, unique among siblings.
    pub name: String,

    /// Step title.
    pub short: String,

    /// Step body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub long: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputDef>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<OutputDef>,

    /// Child steps, in execution order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepConfig>,
}

impl ProcedureConfig {
    /// Build the procedure this definition describes.
    ///
    /// The result is not validated; call [`Procedure::check`] for that.
    pub fn to_procedure(&self) -> Procedure {
        let mut procedure = Procedure::new();
        procedure.short(self.short.as_str()).long(&self.long);
        for step in &self.steps {
            procedure.add_step(|builder| step.configure(builder));
        }
        procedure
    }
}

impl StepConfig {
    /// Apply this definition, children included, to a step being built.
    pub fn configure(&self, builder: &mut StepBuilder<'_>) {
        builder
            .name(self.name.as_str())
            .short(self.short.as_str())
            .long(&self.long);
        for input in &self.inputs {
            builder.input(input.clone());
        }
        for output in &self.outputs {
            builder.output(output.clone());
        }
        for child in &self.steps {
            builder.add_step(|child_builder| child.configure(child_builder));
        }
    }
}
