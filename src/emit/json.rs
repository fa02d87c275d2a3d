use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::definition::GraphcoolDefinition;
use crate::project::{GraphcoolModule, ModuleFiles, ProjectDefinition};

#[derive(Serialize)]
pub struct JsonOutput {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub project: ProjectInfo,
    pub modules: Vec<ModuleOutput>,
}

#[derive(Serialize)]
pub struct ProjectInfo {
    pub path: String,
    pub modules_count: usize,
    pub files_count: usize,
}

#[derive(Serialize)]
pub struct ModuleOutput {
    pub name: String,
    pub base_dir: String,
    pub content: String,
    pub files: ModuleFiles,
    pub definition: GraphcoolDefinition,
}

impl ModuleOutput {
    pub fn from_module(module: &GraphcoolModule) -> Self {
        Self {
            name: module.display_name().to_string(),
            base_dir: module.base_dir.display().to_string(),
            content: module.content.clone(),
            files: module.files.clone(),
            definition: module.definition.clone(),
        }
    }
}

impl JsonOutput {
    pub fn from_project(path: &str, project: &ProjectDefinition) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            project: ProjectInfo {
                path: path.to_string(),
                modules_count: project.modules.len(),
                files_count: project.file_count(),
            },
            modules: project.modules.iter().map(ModuleOutput::from_module).collect(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
