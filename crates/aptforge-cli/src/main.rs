//! aptforge - create a flat apt repository at the named location.
//!
//! Thin shell over `aptforge-core`: parse arguments, set up logging, run
//! the index pass then the release pass, map any failure to a non-zero
//! exit.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use aptforge_core::Repo;

#[derive(Debug, Parser)]
#[command(name = "aptforge")]
#[command(author, version, about = "Create an apt repository from a directory of .deb packages")]
struct Cli {
    /// Directory containing the packages (defaults to the current directory)
    #[arg(value_name = "REPO_PATH", default_value = ".")]
    repo_path: PathBuf,

    /// Print debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(root = %cli.repo_path.display(), "building repository");

    let repo = Repo::new(&cli.repo_path);
    repo.write_package_meta()
        .with_context(|| format!("failed to build package index in {}", cli.repo_path.display()))?;
    repo.write_release_meta()
        .with_context(|| format!("failed to build release manifest in {}", cli.repo_path.display()))?;

    Ok(())
}
