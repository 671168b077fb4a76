// seximal-cli/src/output.rs
//
// Colored terminal output helpers shared by the command implementations.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(40);
    println!("{}", line.blue());
    println!(" {}", text.bold());
    println!("{}", line.blue());
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.cyan(), value);
}
