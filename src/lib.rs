//! Runsheet - gradually automatable runbooks.
//!
//! A runsheet procedure is a tree of manual steps. Each step has a title,
//! an optional body of instructions, and typed facts it consumes from or
//! produces for later steps. Procedures are built in Rust or loaded from
//! YAML, then validated, rendered as Markdown, or walked through
//! interactively one step at a time.
//!
//! # Modules
//!
//! - [`procedure`] - The step tree and the builder API
//! - [`check`] - Consistency checks and problem reports
//! - [`render`] - Markdown documentation with anchors and a table of contents
//! - [`walker`] - Interactive step-by-step execution
//! - [`config`] - YAML procedure definitions
//! - [`cli`] - The `runsheet` binary and the embeddable default interface
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use runsheet::Procedure;
//!
//! let mut pcd = Procedure::new();
//! pcd.short("Rotate the API key");
//! pcd.add_step(|s| {
//!     s.name("generate")
//!         .short("Generate a new key")
//!         .output_string("apiKey", "The new key");
//! });
//! pcd.add_step(|s| {
//!     s.name("deploy")
//!         .short("Deploy the new key")
//!         .input_string("apiKey", true);
//! });
//!
//! let mut doc = Vec::new();
//! pcd.render(&mut doc).unwrap();
//! assert!(String::from_utf8(doc).unwrap().starts_with("# Rotate the API key"));
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod procedure;
pub mod render;
pub mod walker;

pub use check::{Problem, ProblemKind};
pub use cli::{handle_args, DefaultCli};
pub use error::{Result, RunsheetError};
pub use procedure::{
    InputDef, OutputDef, Procedure, Step, StepBuilder, StepId, ValueType, Visit, ROOT_NAME,
};
