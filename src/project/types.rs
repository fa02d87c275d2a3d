use std::path::PathBuf;

use crate::definition::{GraphcoolDefinition, OrderedMap};

/// Relative path → file content, in discovery order
pub type ModuleFiles = OrderedMap<String>;

/// A manifest together with every file it references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphcoolModule {
    /// Empty for the root module, declared name for sub-modules
    pub name: String,
    /// Raw manifest text
    pub content: String,
    pub files: ModuleFiles,
    /// Directory all relative references of this module resolve against
    pub base_dir: PathBuf,
    pub definition: GraphcoolDefinition,
}

impl GraphcoolModule {
    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// Name for display, `root` for the root module
    pub fn display_name(&self) -> &str {
        if self.is_root() {
            "root"
        } else {
            &self.name
        }
    }

    pub fn file(&self, relative_path: &str) -> Option<&str> {
        self.files.get(relative_path).map(String::as_str)
    }
}

/// Resolved project: the root module first, then sub-modules in declared order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDefinition {
    pub modules: Vec<GraphcoolModule>,
}

impl ProjectDefinition {
    pub fn root(&self) -> Option<&GraphcoolModule> {
        self.modules.first()
    }

    pub fn module(&self, name: &str) -> Option<&GraphcoolModule> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Total number of resolved files across all modules
    pub fn file_count(&self) -> usize {
        self.modules.iter().map(|m| m.files.len()).sum()
    }
}
