use anyhow::Result;
use console::{style, Emoji};
use std::path::Path;
use std::process::ExitCode;

use crate::config::ResolverConfig;
use crate::project::{ProjectDefinition, Resolver};

use super::report::format_resolve_error;

static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");

/// Resolve the project, printing the error report on failure
pub fn resolve_or_report(path: &Path, config: ResolverConfig) -> Option<ProjectDefinition> {
    match Resolver::new(config).resolve(path) {
        Ok(project) => Some(project),
        Err(e) => {
            println!("{}", format_resolve_error(&e));
            None
        }
    }
}

pub fn run_check(path: &Path, config: ResolverConfig) -> Result<ExitCode> {
    let Some(project) = resolve_or_report(path, config) else {
        return Ok(ExitCode::FAILURE);
    };

    println!(
        "\n{}Project definition is valid: {}\n",
        SUCCESS,
        style(path.display()).green()
    );

    for module in &project.modules {
        println!(
            "  {:<16} {:>3} file(s)  {}",
            style(module.display_name()).cyan(),
            module.files.len(),
            style(module.base_dir.display()).dim()
        );
    }
    println!();

    Ok(ExitCode::SUCCESS)
}
