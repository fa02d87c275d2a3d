//! Project resolution.
//!
//! Reads the root manifest, follows the declared sub-modules and loads every
//! referenced file. A module either resolves completely or the whole
//! resolution fails with all of that module's problems.

pub mod collector;
mod error;
pub mod paths;
mod resolver;
mod types;

pub use collector::{collect_files, CollectedFiles};
pub use error::{ResolveError, ValidationError};
pub use paths::{is_file_of_kind, is_function_file, is_graphql_file, FileKind};
pub use resolver::{resolve_project, Resolver};
pub use types::{GraphcoolModule, ModuleFiles, ProjectDefinition};
