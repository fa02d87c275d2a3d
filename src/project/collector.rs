//! Collects every file a single module's manifest references.
//!
//! All failures are accumulated; nothing here stops at the first broken
//! reference.

use std::path::Path;
use tracing::debug;

use crate::definition::GraphcoolDefinition;
use crate::fs::FileSystem;

use super::error::ValidationError;
use super::paths::{is_function_file, is_graphql_file, resolve_reference};
use super::types::ModuleFiles;

/// Files and failures of one module's collection pass
#[derive(Debug, Default)]
pub struct CollectedFiles {
    pub files: ModuleFiles,
    pub errors: Vec<ValidationError>,
}

impl CollectedFiles {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

struct Collector<'a, F: FileSystem> {
    fs: &'a F,
    base_dir: &'a Path,
    collected: CollectedFiles,
}

impl<'a, F: FileSystem> Collector<'a, F> {
    /// Store `reference` if it exists, otherwise record `missing`.
    fn load(&mut self, reference: &str, missing: impl FnOnce() -> ValidationError) {
        let path = resolve_reference(self.base_dir, reference);

        if !self.fs.exists(&path) {
            self.collected.errors.push(missing());
            return;
        }

        match self.fs.read_to_string(&path) {
            Ok(content) => {
                debug!("Loaded {} ({} bytes)", reference, content.len());
                self.collected.files.insert(reference, content);
            }
            Err(e) => self.collected.errors.push(ValidationError::UnreadableFile {
                path: reference.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn collect_types(&mut self, types: &str) {
        let resolved = resolve_reference(self.base_dir, types);
        self.load(types, || ValidationError::MissingTypes { path: resolved });
    }

    fn collect_permissions(&mut self, definition: &GraphcoolDefinition) {
        for permission in definition.permissions() {
            let Some(query) = permission.query.as_deref() else {
                continue;
            };
            if !is_graphql_file(query) {
                continue;
            }

            self.load(query, || ValidationError::MissingPermissionQuery {
                path: query.to_string(),
                operation: permission.operation.clone(),
            });
        }
    }

    fn collect_functions(&mut self, definition: &GraphcoolDefinition) {
        for (name, function) in definition.functions() {
            if let Some(src) = function.code_src() {
                if !is_function_file(src) {
                    self.collected
                        .errors
                        .push(ValidationError::InvalidFunctionPath {
                            path: src.to_string(),
                            function: name.to_string(),
                        });
                }

                self.load(src, || ValidationError::MissingFunctionHandler {
                    path: src.to_string(),
                    function: name.to_string(),
                });
            }

            if let Some(query) = function.query.as_deref().filter(|q| is_graphql_file(q)) {
                self.load(query, || ValidationError::MissingFunctionQuery {
                    path: query.to_string(),
                    function: name.to_string(),
                });
            }

            if let Some(schema) = function.schema.as_deref().filter(|s| is_graphql_file(s)) {
                self.load(schema, || ValidationError::MissingFunctionSchema {
                    path: schema.to_string(),
                    function: name.to_string(),
                });
            }
        }
    }
}

/// Resolve and load every reference of `definition` against `base_dir`.
///
/// Order of both files and errors: types, permissions, then functions in
/// manifest order (handler, subscription query, schema extension).
pub fn collect_files<F: FileSystem>(
    fs: &F,
    base_dir: &Path,
    definition: &GraphcoolDefinition,
) -> CollectedFiles {
    let mut collector = Collector {
        fs,
        base_dir,
        collected: CollectedFiles::default(),
    };

    collector.collect_types(&definition.types);
    collector.collect_permissions(definition);
    collector.collect_functions(definition);

    collector.collected
}
