//! Prism - Entry Point
//!
//! Operator CLI over the presenter registry: list what the running build
//! discovered, and inspect the registrations discovery skipped.

// Force-link prism-presenters to ensure linkme registrations are included
extern crate prism_presenters;

use clap::{Parser, Subcommand};

use prism::application::registry::presenter_index;
use prism::config::ConfigLoader;
use prism::logging::init_logging;

/// Command line interface for Prism
#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Prism - presenter resolution for content rendering")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all discovered presenter registrations
    List,
    /// Show registrations that discovery skipped or demoted
    Diagnostics,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let index = presenter_index();
    match cli.command {
        Command::List => {
            println!("Registered presenters:");
            println!();
            for candidate in index.candidates() {
                println!(
                    "  - {} (model {}, priority {}): {}",
                    candidate.name, candidate.model_name, candidate.priority, candidate.description
                );
            }
            if !index.diagnostics().is_empty() {
                println!();
                println!(
                    "{} registration(s) skipped; run `prism diagnostics` for details",
                    index.diagnostics().len()
                );
            }
        }
        Command::Diagnostics => {
            if index.diagnostics().is_empty() {
                println!("All registrations were usable.");
            } else {
                println!("Skipped registrations:");
                println!();
                for diagnostic in index.diagnostics() {
                    println!("  - {diagnostic}");
                }
            }
        }
    }

    Ok(())
}
