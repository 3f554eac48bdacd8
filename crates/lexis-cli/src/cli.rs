//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lexis: string analysis engine with natural-language queries
#[derive(Parser)]
#[command(name = "lexis")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a string and print its derived attributes
    Analyze {
        /// The string value to analyze
        #[arg(value_name = "VALUE")]
        value: String,

        /// Output raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Translate a natural-language query into a filter set
    Query {
        /// Free-text query, e.g. "palindromic strings longer than 10"
        #[arg(value_name = "TEXT")]
        text: String,

        /// Output raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP API server
    Serve {
        /// Port for the HTTP server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// Snapshot file to load on start and save on mutation
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// Don't save the snapshot after mutations
        #[arg(long)]
        no_save: bool,
    },
}
