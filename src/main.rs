use std::io::{self, Write};

use anyhow::Result;
use thiserror::Error;

use minre::{compile, generate};

#[derive(Debug, Error)]
enum PromptError {
    #[error("input stream closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

// Print a label and read one line from stdin, without the trailing newline.
fn prompt(label: &str) -> Result<String, PromptError> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(PromptError::Closed);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn run_match() -> Result<(), PromptError> {
    let pattern = prompt("Enter a regex pattern: ")?;
    let text = prompt("Enter a string to match: ")?;
    if compile(&pattern).is_match(&text) {
        println!("The string \"{text}\" matches the regex \"{pattern}\".");
    } else {
        println!("The string \"{text}\" does not match the regex \"{pattern}\".");
    }
    Ok(())
}

fn run_generate() -> Result<(), PromptError> {
    println!("\nEnter a string in one of the following formats:");
    println!(" - URL (e.g., https://example.com)");
    println!(" - Email (e.g., user@example.com)");
    println!(" - Phone number (e.g., (123) 456-7890)");
    println!(" - ZIP code (e.g., 12345 or 12345-6789)");
    let input = prompt("\nEnter your string: ")?;
    let pattern = generate::regex_for_string(&input);
    println!("\nGenerated regex for the input string: {pattern}");
    Ok(())
}

fn main() -> Result<()> {
    loop {
        println!("\nOptions:\n1. Match a string with a regex\n2. Generate regex for a string\n3. Exit");
        let choice = match prompt("Select an option (1/2/3): ") {
            Ok(choice) => choice,
            // End of input is a normal way to leave the loop.
            Err(PromptError::Closed) => break,
            Err(err) => return Err(err.into()),
        };
        let outcome = match choice.as_str() {
            "1" => run_match(),
            "2" => run_generate(),
            "3" => {
                println!("Goodbye!");
                break;
            }
            _ => {
                println!("Invalid choice. Please enter 1, 2, or 3.");
                Ok(())
            }
        };
        match outcome {
            Ok(()) => {}
            Err(PromptError::Closed) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
