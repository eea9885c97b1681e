//! Entry point for the legible CLI

use clap::Parser;
use legible_cli::commands::{self, Commands};

/// Chapter-by-chapter prose readability analyzer
#[derive(Debug, Parser)]
#[command(name = "legible", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze(args) => args.execute(),
        Commands::Report(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => commands::run_list(&subcommand),
    };

    if let Err(error) = result {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
