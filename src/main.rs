use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use graphcool_project::cli::{run_check, run_show, Args, Command};
use graphcool_project::config::ResolverConfig;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ResolverConfig::discover(args.config.as_deref(), args.command.path())?;

    match args.command {
        Command::Check { path } => run_check(&path, config),
        Command::Show { path, json } => run_show(&path, config, json),
    }
}
