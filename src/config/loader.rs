//! Procedure definition loading.

use std::fs;
use std::path::Path;

use crate::config::schema::ProcedureConfig;
use crate::error::{Result, RunsheetError};
use crate::procedure::Procedure;

/// Load a procedure definition file and build its procedure.
///
/// # Errors
///
/// Returns `DefinitionNotFound` if the file doesn't exist.
/// Returns `DefinitionParseError` if the YAML is invalid.
pub fn load_procedure_file(path: &Path) -> Result<Procedure> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RunsheetError::DefinitionNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RunsheetError::Io(e)
        }
    })?;

    parse_procedure(&content, path)
}

/// Parse YAML content into a procedure.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_procedure(content: &str, source_path: &Path) -> Result<Procedure> {
    let config: ProcedureConfig =
        serde_yaml::from_str(content).map_err(|e| RunsheetError::DefinitionParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        "Loaded procedure '{}' from {}",
        config.short,
        source_path.display()
    );
    Ok(config.to_procedure())
}
