//! Line-oriented stdin prompting with validation loops.

use std::io::{self, Write};
use std::process;

/// Print `prompt` without a trailing newline and read one trimmed line.
/// End of input ends the program cleanly.
pub fn read_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => process::exit(0),
        Ok(_) => line.trim().to_string(),
    }
}

/// Prompt until `parse` accepts the input. Invalid entries are called out
/// and the allowed options are repeated.
pub fn ask<T>(prompt: &str, options: &str, parse: impl Fn(&str) -> Option<T>) -> T {
    let mut input = read_line(prompt);
    loop {
        if let Some(value) = parse(&input) {
            return value;
        }
        println!("{input} is not a valid argument!");
        input = read_line(&format!("Please input correct option : ({options}) "));
    }
}

/// Parser for the recurring Yes/No confirmation.
pub fn yes_no(token: &str) -> Option<bool> {
    match token.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}
