//! Example: Analyze strings and query them with natural language.
//!
//! Usage:
//!   cargo run --example analyze -- "some string" "another string"
//!
//! Example:
//!   cargo run --example analyze -- level "hello world" racecar

use std::env;

use lexis::{filter, translate, RecordStore};

fn main() -> lexis::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("Usage: cargo run --example analyze -- <string>...");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example analyze -- level \"hello world\" racecar");
        std::process::exit(1);
    }

    let store = RecordStore::new();

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Lexis Analysis");
    println!("{}", separator);

    for value in &args {
        let record = store.create(value)?;
        println!();
        println!("{:?}", record.value);
        println!("  id:            {}...", &record.id[..16]);
        println!("  length:        {}", record.length);
        println!("  palindrome:    {}", record.is_palindrome);
        println!("  unique chars:  {}", record.unique_characters);
        println!("  word count:    {}", record.word_count);
    }

    println!();
    println!("{}", separator);
    let query = "single word palindromic strings";
    println!("Query: {:?}", query);
    println!("{}", separator);

    let filters = translate(query)?;
    for record in filter(&store.enumerate(), &filters) {
        println!("  match: {:?}", record.value);
    }

    Ok(())
}
