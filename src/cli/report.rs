use console::style;
use std::error::Error;

use crate::project::{ResolveError, ValidationError};

pub const REPORT_HEADER: &str =
    "The following errors occurred while reading the graphcool.yml project definition:";

/// Render validation errors: a bold header, then one indented red line each.
pub fn format_validation_report(errors: &[ValidationError]) -> String {
    let messages = errors
        .iter()
        .map(|e| format!("  {}", style(e).red()))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}\n", style(REPORT_HEADER).bold(), messages)
}

/// Render any resolution failure for the terminal
pub fn format_resolve_error(err: &ResolveError) -> String {
    match err {
        ResolveError::Validation { errors, .. } => format_validation_report(errors),
        other => {
            let mut message = format!("{} {}", style("error:").red().bold(), other);
            let mut source = other.source();
            while let Some(cause) = source {
                message.push_str(&format!("\n  caused by: {}", cause));
                source = cause.source();
            }
            message
        }
    }
}
