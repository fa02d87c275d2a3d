mod args;
pub mod check;
pub mod report;
mod show;

pub use args::{Args, Command};
pub use check::{resolve_or_report, run_check};
pub use report::{format_resolve_error, format_validation_report, REPORT_HEADER};
pub use show::run_show;
