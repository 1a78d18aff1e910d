//! CLI output formatting utilities

use colored::Colorize;

use crate::auth::Payload;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Print the fields of a token payload
pub fn print_payload(payload: &Payload) {
    println!("{}", "Token Payload".bold().underline());
    println!();
    println!("  {} {}", "ID:".bold(), payload.id());
    println!("  {} {}", "Username:".bold(), payload.username());
    println!(
        "  {} {}",
        "Issued at:".bold(),
        payload.issued_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  {} {}",
        "Expires at:".bold(),
        payload.expired_at().format("%Y-%m-%d %H:%M:%S UTC").to_string().cyan()
    );
}
