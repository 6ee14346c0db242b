//! Console output for the start and end of a session

use super::config::PersistenceConfig;
use crate::menace::Record;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{key}:"), value);
}

pub fn print_banner(training: Option<usize>) {
    print_section("MENACE - Matchbox Educable Noughts And Crosses Engine");
    match training {
        Some(games) => println!("Training against a random opponent for {games} games"),
        None => {
            println!("You are H, MENACE is C. Cells are numbered 0-8, row by row.");
            println!("Type 'quit' to save and leave.");
        }
    }
}

pub fn print_loading() {
    println!("Loading existing matchboxes...");
}

/// Final record and where it went.
pub fn print_summary(record: &Record, persistence: &PersistenceConfig, matchboxes: usize) {
    print_section("Session saved");
    println!("{record}");
    print_kv("Games", &record.games().to_string());
    print_kv(
        "Matchboxes",
        &format!("{matchboxes} saved to {}", persistence.matchboxes.display()),
    );
    print_kv("Record", &persistence.record.display().to_string());
}
