//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text and tables
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Render a list of rows as a table, or a placeholder when empty.
pub fn list_table<T: Tabled>(items: &[T]) -> String {
    if items.is_empty() {
        "No results found.".to_string()
    } else {
        Table::new(items).with(Style::modern()).to_string()
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", list_table(items)),
        OutputFormat::Json => print_json(items, "[]"),
    }
}

/// Print a single item as JSON
pub fn print_json<T: Serialize + ?Sized>(item: &T, fallback: &str) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| fallback.to_string());
    println!("{json}");
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
