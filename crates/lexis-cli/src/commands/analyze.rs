//! Analyze command - derive and print the attributes of one string.

use colored::Colorize;

pub fn run(value: String, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let record = lexis::analyze(&value);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("{} {:?}", "Analyzed".cyan().bold(), record.value);
    println!();
    println!("  id:                 {}", record.id);
    println!("  length:             {}", record.length);
    println!(
        "  palindrome:         {}",
        if record.is_palindrome {
            "yes".green().to_string()
        } else {
            "no".to_string()
        }
    );
    println!("  unique characters:  {}", record.unique_characters);
    println!("  word count:         {}", record.word_count);

    if verbose {
        println!();
        println!("{}", "Character frequency:".yellow().bold());
        for (ch, count) in &record.character_frequency_map {
            println!("  {:?}  {}", ch, count);
        }
    }

    Ok(())
}
