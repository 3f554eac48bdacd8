//! Serve command - run the HTTP API server.

use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use lexis::RecordStore;

use crate::server::{app, state::AppState};

pub fn run(
    port: u16,
    store_path: Option<PathBuf>,
    no_save: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load an existing snapshot, or start empty
    let store = match store_path {
        Some(ref path) if path.exists() => {
            let store = RecordStore::load(path)?;
            if verbose {
                println!(
                    "Loaded {} records from {}",
                    store.len(),
                    path.display()
                );
            }
            store
        }
        _ => RecordStore::new(),
    };

    let state = AppState::new(Arc::new(store), store_path.clone(), !no_save);

    println!();
    println!(
        "{} {}",
        "Starting server at".cyan().bold(),
        format!("http://localhost:{}", port).white().bold()
    );
    if let Some(ref path) = store_path {
        println!("  Snapshot: {}", path.display());
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    // Run the server
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        // Set up Ctrl+C handler
        let state_clone = state.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            if let Err(e) = state_clone.save() {
                eprintln!("Error saving: {}", e);
            }
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
