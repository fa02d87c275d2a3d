use anyhow::Result;
use console::style;
use std::path::Path;
use std::process::ExitCode;

use crate::config::ResolverConfig;
use crate::emit::JsonOutput;

use super::check::resolve_or_report;

pub fn run_show(path: &Path, config: ResolverConfig, json: bool) -> Result<ExitCode> {
    let Some(project) = resolve_or_report(path, config) else {
        return Ok(ExitCode::FAILURE);
    };

    if json {
        let output = JsonOutput::from_project(&path.display().to_string(), &project);
        println!("{}", output.to_json());
        return Ok(ExitCode::SUCCESS);
    }

    for module in &project.modules {
        println!(
            "{} {}",
            style(module.display_name()).cyan().bold(),
            style(format!("({})", module.base_dir.display())).dim()
        );

        if module.files.is_empty() {
            println!("  {}", style("(no files)").dim());
        }
        for (file, content) in module.files.iter() {
            println!(
                "  {} {}",
                style(file).green(),
                style(format!("{} lines", content.lines().count())).dim()
            );
        }
        println!();
    }

    Ok(ExitCode::SUCCESS)
}
