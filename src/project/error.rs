use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::definition::DefinitionError;

/// One broken reference found while collecting a module's files
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The types definition file \"{}\" could not be found.", .path.display())]
    MissingTypes { path: PathBuf },

    #[error("The file {path} for permission query {operation} does not exist")]
    MissingPermissionQuery { path: String, operation: String },

    #[error("The handler {path} for function {function} is not a valid function path. It must end with .js and be in the current working directory.")]
    InvalidFunctionPath { path: String, function: String },

    #[error("The file {path} for function {function} does not exist")]
    MissingFunctionHandler { path: String, function: String },

    #[error("The file {path} for the subscription query of function {function} does not exist")]
    MissingFunctionQuery { path: String, function: String },

    #[error("The file {path} for the schema extension of function {function} does not exist")]
    MissingFunctionSchema { path: String, function: String },

    #[error("The file {path} could not be read: {reason}")]
    UnreadableFile { path: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("manifest file {} does not exist", .path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("failed to read manifest {}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse the definition of module {module}")]
    Definition {
        module: String,
        #[source]
        source: DefinitionError,
    },

    #[error("{} error(s) while reading the definition of module {module}", .errors.len())]
    Validation {
        module: String,
        errors: Vec<ValidationError>,
    },
}

impl ResolveError {
    /// Validation messages, empty unless this is a validation failure
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ResolveError::Validation { errors, .. } => errors,
            _ => &[],
        }
    }
}
