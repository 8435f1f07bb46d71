//! Haft docs CLI - navigation checker for the documentation site.
//!
//! Provides commands for:
//! - `check`: Validate configuration, sidebars and their cross-references
//! - `tree`: Print a sidebar as an indented tree or JSON
//! - `locate`: Show breadcrumbs, route and previous/next links of a document

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, LocateArgs, TreeArgs};
use output::Output;

/// Haft docs - documentation site navigation checker.
#[derive(Parser)]
#[command(name = "haft-docs", version, about)]
struct Cli {
    /// Enable verbose output (show loading logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration and sidebars.
    Check(CheckArgs),
    /// Print a sidebar.
    Tree(TreeArgs),
    /// Locate a document in the navigation.
    Locate(LocateArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Tree(args) => args.execute(),
        Commands::Locate(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
