//! Lexis CLI - string analysis engine and HTTP service.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { value, json } => commands::analyze::run(value, json, cli.verbose),

        Commands::Query { text, json } => commands::query::run(text, json, cli.verbose),

        Commands::Serve {
            port,
            store,
            no_save,
        } => commands::serve::run(port, store, no_save, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
