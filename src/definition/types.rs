use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::OrderedMap;

/// Parsed `graphcool.yml` manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphcoolDefinition {
    /// Relative path of the types schema (required)
    pub types: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<PermissionDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<OrderedMap<FunctionDefinition>>,
    /// Sub-module name → manifest path relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<OrderedMap<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDefinition {
    /// e.g. `Post.create` or `UserToPost.connect`
    pub operation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// `subscription`, `resolver`, `operationBefore`, ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub handler: FunctionHandler,
    /// Subscription query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Schema extension for resolver functions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionHandler {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<FunctionCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook: Option<WebhookHandler>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCode {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WebhookHandler {
    Url(String),
    Config {
        url: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        headers: BTreeMap<String, String>,
    },
}

impl FunctionDefinition {
    /// Source path of the handler code, if the function is code-backed
    pub fn code_src(&self) -> Option<&str> {
        self.handler.code.as_ref().map(|code| code.src.as_str())
    }
}

impl GraphcoolDefinition {
    pub fn permissions(&self) -> &[PermissionDefinition] {
        self.permissions.as_deref().unwrap_or_default()
    }

    pub fn functions(&self) -> impl Iterator<Item = (&str, &FunctionDefinition)> {
        self.functions.iter().flat_map(|functions| functions.iter())
    }

    pub fn modules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modules
            .iter()
            .flat_map(|modules| modules.iter())
            .map(|(name, path)| (name, path.as_str()))
    }
}
