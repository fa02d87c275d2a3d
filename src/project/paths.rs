//! File-kind classification for manifest references.
//!
//! A reference is of a given kind when its last path segment ends with the
//! kind's suffix and the path does not start by escaping its directory.

use std::path::{Component, Path, PathBuf};

/// Leading segment that escapes the module directory
pub const TRAVERSAL_MARKER: &str = "../";

/// Kind of file a manifest reference may point to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Schema definitions, permission queries, subscription queries
    GraphQl,
    /// Function handler code
    Function,
}

impl FileKind {
    pub fn suffix(&self) -> &'static str {
        match self {
            FileKind::GraphQl => ".graphql",
            FileKind::Function => ".js",
        }
    }
}

/// Check whether `path` is a file of `kind`.
///
/// The suffix is compared against the final segment only, so `"xgraphql"`
/// and `"queries.graphql/readme"` are both rejected.
pub fn is_file_of_kind(path: &str, kind: FileKind) -> bool {
    if path.starts_with(TRAVERSAL_MARKER) {
        return false;
    }

    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name.ends_with(kind.suffix())
}

pub fn is_graphql_file(path: &str) -> bool {
    is_file_of_kind(path, FileKind::GraphQl)
}

pub fn is_function_file(path: &str) -> bool {
    is_file_of_kind(path, FileKind::Function)
}

/// Join a reference onto a base directory, normalizing `.` and `..`
/// lexically. The file system is not consulted.
///
/// A leading root in `reference` is dropped, so `/etc/x.js` resolves to
/// `<base_dir>/etc/x.js` rather than replacing the base.
pub fn resolve_reference(base_dir: &Path, reference: &str) -> PathBuf {
    let mut resolved = PathBuf::new();

    let relative = Path::new(reference)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)));

    for component in base_dir.components().chain(relative) {
        match component {
            Component::CurDir => {}
            // `..` above the root stays at the root; above a relative base it is kept
            Component::ParentDir => match resolved.components().next_back() {
                Some(Component::Normal(_)) => {
                    resolved.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => resolved.push(".."),
            },
            other => resolved.push(other.as_os_str()),
        }
    }

    resolved
}
