// seximal-cli/src/main.rs
//
// Binary entry point for the seximal CLI. Parses arguments, initializes
// logging, dispatches to the command implementations, and maps errors to a
// nonzero exit status.

use clap::Parser;
use owo_colors::OwoColorize;
use std::process;

use seximal_cli::cli::{Cli, Commands};
use seximal_cli::commands;

fn main() {
    seximal_cli::logging::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert(args) => commands::convert::run(&args),
        Commands::Timer(args) => commands::timer::run(&args),
        Commands::Clock(args) => commands::clock::run(&args),
        Commands::Date(args) => commands::date::run(&args),
        Commands::Units(args) => commands::units::run(&args),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
