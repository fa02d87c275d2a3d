use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::ResolverConfig;
use crate::definition::read_definition;
use crate::fs::{FileSystem, OsFileSystem};

use super::collector::collect_files;
use super::error::ResolveError;
use super::paths::resolve_reference;
use super::types::{GraphcoolModule, ProjectDefinition};

/// Resolves a project directory into a [`ProjectDefinition`]
pub struct Resolver<F: FileSystem> {
    fs: F,
    config: ResolverConfig,
}

impl Resolver<OsFileSystem> {
    pub fn new(config: ResolverConfig) -> Self {
        Self::with_fs(OsFileSystem, config)
    }
}

impl<F: FileSystem> Resolver<F> {
    pub fn with_fs(fs: F, config: ResolverConfig) -> Self {
        Self { fs, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the root manifest of `project_root` and all its sub-modules.
    ///
    /// Sub-module manifest paths are relative to the project root. The first
    /// module with errors ends the resolution; later modules are not read.
    pub fn resolve(&self, project_root: &Path) -> Result<ProjectDefinition, ResolveError> {
        let root_manifest = project_root.join(&self.config.manifest_file);
        let root = self.resolve_module(&root_manifest, &self.config.root_module_name)?;

        let declared: Vec<(String, String)> = root
            .definition
            .modules()
            .map(|(name, path)| (name.to_string(), path.to_string()))
            .collect();

        let mut modules = Vec::with_capacity(declared.len() + 1);
        modules.push(root);

        for (name, path) in declared {
            let manifest = resolve_reference(project_root, &path);
            let mut module = self.resolve_module(&manifest, &name)?;
            module.name = name;
            modules.push(module);
        }

        info!(
            "Resolved {} module(s) from {}",
            modules.len(),
            project_root.display()
        );

        Ok(ProjectDefinition { modules })
    }

    /// Resolve one manifest file; its directory becomes the module's base dir.
    ///
    /// `module_name` only labels errors. The returned module has an empty
    /// name; callers tag sub-modules themselves.
    pub fn resolve_module(
        &self,
        manifest: &Path,
        module_name: &str,
    ) -> Result<GraphcoolModule, ResolveError> {
        debug!("Resolving module {} from {}", module_name, manifest.display());

        if !self.fs.exists(manifest) {
            return Err(ResolveError::ManifestNotFound {
                path: manifest.to_path_buf(),
            });
        }

        let content =
            self.fs
                .read_to_string(manifest)
                .map_err(|source| ResolveError::ManifestRead {
                    path: manifest.to_path_buf(),
                    source,
                })?;

        let definition = read_definition(&content).map_err(|source| ResolveError::Definition {
            module: module_name.to_string(),
            source,
        })?;

        let base_dir = manifest
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(PathBuf::new);
        let collected = collect_files(&self.fs, &base_dir, &definition);

        if !collected.is_valid() {
            return Err(ResolveError::Validation {
                module: module_name.to_string(),
                errors: collected.errors,
            });
        }

        debug!(
            "Module {} resolved with {} file(s)",
            module_name,
            collected.files.len()
        );

        Ok(GraphcoolModule {
            name: String::new(),
            content,
            files: collected.files,
            base_dir,
            definition,
        })
    }
}

/// Resolve `project_root` from disk with default settings
pub fn resolve_project(project_root: &Path) -> Result<ProjectDefinition, ResolveError> {
    Resolver::new(ResolverConfig::default()).resolve(project_root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFileSystem;
    use crate::project::ValidationError;

    fn resolver(fs: MemoryFileSystem) -> Resolver<MemoryFileSystem> {
        Resolver::with_fs(fs, ResolverConfig::default())
    }

    fn project_fs() -> MemoryFileSystem {
        MemoryFileSystem::new()
            .with_file(
                "/p/graphcool.yml",
                "types: ./types.graphql\nmodules:\n  blog: ./modules/blog/graphcool.yml\n  auth: modules/auth/graphcool.yml\n",
            )
            .with_file("/p/types.graphql", "type User { id: ID! }")
            .with_file(
                "/p/modules/blog/graphcool.yml",
                "types: ./types.graphql\nfunctions:\n  publish:\n    handler:\n      code:\n        src: src/publish.js\n",
            )
            .with_file("/p/modules/blog/types.graphql", "type Post { id: ID! }")
            .with_file("/p/modules/blog/src/publish.js", "module.exports = e => e")
            .with_file("/p/modules/auth/graphcool.yml", "types: types.graphql\n")
            .with_file("/p/modules/auth/types.graphql", "type Session { id: ID! }")
    }

    #[test]
    fn test_root_first_then_declared_order() {
        let project = resolver(project_fs()).resolve(Path::new("/p")).unwrap();

        let names: Vec<&str> = project.modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["", "blog", "auth"]);

        let root = project.root().unwrap();
        assert!(root.is_root());
        assert_eq!(root.display_name(), "root");
        assert_eq!(root.base_dir, PathBuf::from("/p"));

        let blog = project.module("blog").unwrap();
        assert_eq!(blog.base_dir, PathBuf::from("/p/modules/blog"));
        assert_eq!(blog.file("./types.graphql"), Some("type Post { id: ID! }"));
        assert_eq!(blog.file("src/publish.js"), Some("module.exports = e => e"));
        assert_eq!(project.file_count(), 4);
    }

    #[test]
    fn test_module_content_is_raw_manifest() {
        let project = resolver(project_fs()).resolve(Path::new("/p")).unwrap();
        let auth = project.module("auth").unwrap();
        assert_eq!(auth.content, "types: types.graphql\n");
        assert_eq!(auth.definition.types, "types.graphql");
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let resolver = resolver(project_fs());
        let first = resolver.resolve(Path::new("/p")).unwrap();
        let second = resolver.resolve(Path::new("/p")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_failing_sub_module_aborts() {
        let mut fs = project_fs();
        // blog loses its handler, auth is never reached
        fs.insert(
            "/p/modules/blog/graphcool.yml",
            "types: ./types.graphql\nfunctions:\n  publish:\n    handler:\n      code:\n        src: src/missing.js\n",
        );
        fs.insert("/p/modules/auth/graphcool.yml", "not: [valid");

        let err = resolver(fs).resolve(Path::new("/p")).unwrap_err();
        match err {
            ResolveError::Validation { module, errors } => {
                assert_eq!(module, "blog");
                assert_eq!(
                    errors,
                    vec![ValidationError::MissingFunctionHandler {
                        path: "src/missing.js".to_string(),
                        function: "publish".to_string(),
                    }]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_root_errors_stop_before_sub_modules() {
        let fs = MemoryFileSystem::new().with_file(
            "/p/graphcool.yml",
            "types: types.graphql\nmodules:\n  blog: nowhere/graphcool.yml\n",
        );

        let err = resolver(fs).resolve(Path::new("/p")).unwrap_err();
        assert!(matches!(err, ResolveError::Validation { ref module, .. } if module == "root"));
        assert_eq!(err.validation_errors().len(), 1);
    }

    #[test]
    fn test_missing_root_manifest() {
        let err = resolver(MemoryFileSystem::new())
            .resolve(Path::new("/p"))
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::ManifestNotFound { ref path } if path == Path::new("/p/graphcool.yml")
        ));
    }

    #[test]
    fn test_missing_sub_module_manifest() {
        let fs = MemoryFileSystem::new()
            .with_file("/p/graphcool.yml", "types: t.graphql\nmodules:\n  blog: blog/graphcool.yml\n")
            .with_file("/p/t.graphql", "");

        let err = resolver(fs).resolve(Path::new("/p")).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::ManifestNotFound { ref path } if path == Path::new("/p/blog/graphcool.yml")
        ));
    }

    #[test]
    fn test_unparseable_definition_names_module() {
        let fs = MemoryFileSystem::new().with_file("/p/graphcool.yml", "permissions: []\n");

        let err = resolver(fs).resolve(Path::new("/p")).unwrap_err();
        assert!(matches!(err, ResolveError::Definition { ref module, .. } if module == "root"));
    }

    #[test]
    fn test_custom_manifest_file() {
        let fs = MemoryFileSystem::new()
            .with_file("/p/project.yml", "types: t.graphql\n")
            .with_file("/p/t.graphql", "type A { id: ID! }");
        let config = ResolverConfig {
            manifest_file: "project.yml".to_string(),
            ..ResolverConfig::default()
        };

        let project = Resolver::with_fs(fs, config)
            .resolve(Path::new("/p"))
            .unwrap();
        assert_eq!(project.modules.len(), 1);
    }

    #[test]
    fn test_nested_modules_not_followed() {
        let fs = MemoryFileSystem::new()
            .with_file("/p/graphcool.yml", "types: t.graphql\nmodules:\n  a: a/graphcool.yml\n")
            .with_file("/p/t.graphql", "")
            .with_file("/p/a/graphcool.yml", "types: t.graphql\nmodules:\n  b: b/graphcool.yml\n")
            .with_file("/p/a/t.graphql", "");

        let project = resolver(fs).resolve(Path::new("/p")).unwrap();
        let names: Vec<&str> = project.modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["", "a"]);
    }

    #[test]
    fn test_absolute_sub_module_path_resolved_under_root() {
        let fs = MemoryFileSystem::new()
            .with_file("/p/graphcool.yml", "types: t.graphql\nmodules:\n  blog: /blog/graphcool.yml\n")
            .with_file("/p/t.graphql", "")
            .with_file("/p/blog/graphcool.yml", "types: t.graphql\n")
            .with_file("/p/blog/t.graphql", "")
            .with_file("/blog/graphcool.yml", "types: elsewhere.graphql\n");

        let project = resolver(fs).resolve(Path::new("/p")).unwrap();
        let blog = project.module("blog").unwrap();
        assert_eq!(blog.base_dir, PathBuf::from("/p/blog"));
        assert_eq!(blog.definition.types, "t.graphql");
    }
}
