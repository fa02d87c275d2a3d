//! Resolve a `graphcool.yml` project into a validated, in-memory tree.
//!
//! ```no_run
//! use std::path::Path;
//! use graphcool_project::resolve_project;
//!
//! let project = resolve_project(Path::new("./my-service"))?;
//! for module in &project.modules {
//!     println!("{}: {} files", module.display_name(), module.files.len());
//! }
//! # Ok::<(), graphcool_project::ResolveError>(())
//! ```

pub mod cli;
pub mod config;
pub mod definition;
pub mod emit;
pub mod fs;
pub mod project;

pub use config::ResolverConfig;
pub use definition::{read_definition, GraphcoolDefinition};
pub use project::{
    resolve_project, GraphcoolModule, ProjectDefinition, ResolveError, Resolver, ValidationError,
};
