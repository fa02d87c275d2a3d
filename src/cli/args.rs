use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "graphcool-project")]
#[command(version, about = "Resolve and validate a graphcool.yml project definition")]
pub struct Args {
    /// Resolver config file (TOML); defaults to graphcool-project.toml in the project
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that every file referenced by the project exists
    Check {
        /// Project directory containing graphcool.yml
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Print the resolved project tree
    Show {
        /// Project directory containing graphcool.yml
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Print the full tree as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    pub fn path(&self) -> &PathBuf {
        match self {
            Command::Check { path } | Command::Show { path, .. } => path,
        }
    }
}
