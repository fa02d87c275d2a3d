//! Manifest definition parsing.
//!
//! Turns `graphcool.yml` text into a typed [`GraphcoolDefinition`]. Only the
//! shape of the manifest is checked here; references are resolved later.

mod ordered;
mod types;

pub use ordered::OrderedMap;
pub use types::{
    FunctionCode, FunctionDefinition, FunctionHandler, GraphcoolDefinition, PermissionDefinition,
    WebhookHandler,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("the manifest is empty")]
    Empty,
    #[error("invalid manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parse manifest text into a definition
pub fn read_definition(content: &str) -> Result<GraphcoolDefinition, DefinitionError> {
    if content.trim().is_empty() {
        return Err(DefinitionError::Empty);
    }

    Ok(serde_yaml::from_str(content)?)
}
