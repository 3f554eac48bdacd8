//! Query command - translate free text into a structured filter set.

use colored::Colorize;

pub fn run(text: String, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filters = lexis::translate(&text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&filters)?);
        return Ok(());
    }

    if verbose {
        println!("{} {:?}", "Query".cyan().bold(), text);
        println!();
    }

    println!("{}", "Recognized filters:".cyan().bold());
    if let Some(p) = filters.is_palindrome {
        println!("  is_palindrome:       {}", p);
    }
    if let Some(n) = filters.min_length {
        println!("  min_length:          {}", n);
    }
    if let Some(n) = filters.max_length {
        println!("  max_length:          {}", n);
    }
    if let Some(n) = filters.word_count {
        println!("  word_count:          {}", n);
    }
    if let Some(ref c) = filters.contains_character {
        println!("  contains_character:  {:?}", c);
    }
    if filters.contains_any_vowel == Some(true) {
        println!("  contains_any_vowel:  true");
    }
    if filters.starts_with_vowel == Some(true) {
        println!("  starts_with_vowel:   true");
    }
    if let Some(ref s) = filters.starts_with {
        println!("  starts_with:         {:?}", s);
    }
    if let Some(ref s) = filters.ends_with {
        println!("  ends_with:           {:?}", s);
    }

    Ok(())
}
