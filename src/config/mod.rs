//! Procedure definition files.
//!
//! Procedures can be written in YAML instead of Rust:
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//!
//! A definition is turned into a [`Procedure`](crate::Procedure) through the
//! same builder API authors use, so it is checked, rendered and executed
//! exactly like a hand-built one.
//!
//! # Example
//!
//! ```
//! use runsheet::config::parse_procedure;
//! use std::path::Path;
//!
//! let yaml = "short: Deploy\nsteps:\n  - name: ship\n    short: Ship it\n";
//! let pcd = parse_procedure(yaml, Path::new("deploy.yml")).unwrap();
//! assert!(pcd.check().is_ok());
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_procedure_file, parse_procedure};
pub use schema::{ProcedureConfig, StepConfig};
