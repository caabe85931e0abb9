//! FWLens CLI
//!
//! Command-line interface for FWLens: normalize firewall policy exports and
//! compare two exports rule by rule.

use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Debug, Parser)]
#[command(name = "fwlens")]
#[command(about = "FWLens - Firewall policy export normalization and diff", long_about = None)]
struct Cli {
    /// Log filter directive (overrides RUST_LOG), e.g. "fwlens=debug"
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize an export and list its rules
    Rules(commands::rules::RulesArgs),
    /// Compare two exports and report rule changes
    Diff(commands::diff::DiffArgs),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let result = match cli.command {
        Commands::Rules(args) => commands::rules::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
