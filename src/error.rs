//! Error types for runsheet operations.
//!
//! This module defines [`RunsheetError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Structural problems in a procedure are collected in full and surfaced
//!   once, as [`RunsheetError::InvalidProcedure`]
//! - Lookups of unknown steps fail immediately with [`RunsheetError::StepNotFound`]
//! - Broken operator input streams abort a walk; recoverable read errors do not

use std::path::PathBuf;
use thiserror::Error;

use crate::check::Problem;

/// Core error type for runsheet operations.
#[derive(Debug, Error)]
pub enum RunsheetError {
    /// The procedure failed validation. Every problem found is listed.
    #[error("Problems were found in the procedure")]
    InvalidProcedure { problems: Vec<Problem> },

    /// No step has the requested absolute name.
    #[error("No step with name '{name}'")]
    StepNotFound { name: String },

    /// The operator input stream ended while a response was expected.
    #[error("Input stream closed while waiting for an operator response")]
    InputClosed,

    /// Procedure definition file not found.
    #[error("Procedure definition not found: {path}")]
    DefinitionNotFound { path: PathBuf },

    /// Failed to parse a procedure definition file.
    #[error("Failed to parse procedure at {path}: {message}")]
    DefinitionParseError { path: PathBuf, message: String },

    /// Invalid command-line usage.
    #[error("{message}")]
    Usage { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RunsheetError {
    /// The validation problems carried by this error, if any.
    pub fn problems(&self) -> &[Problem] {
        match self {
            Self::InvalidProcedure { problems } => problems,
            _ => &[],
        }
    }
}

/// Result type alias for runsheet operations.
pub type Result<T> = std::result::Result<T, RunsheetError>;
