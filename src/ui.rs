use cefr_client::CefrLevel;
use colored::{ColoredString, Colorize};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print a success message
pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Print a warning message
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {} ====", title).cyan().bold());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Spinner shown on stderr while waiting for the service
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Table with the rounded style used for all listings
pub fn table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.into_iter().map(Cell::new).collect::<Vec<_>>());
    table
}

/// Level label colored from green (A1) to magenta (C2)
pub fn level_badge(label: &str) -> ColoredString {
    match CefrLevel::ALL.iter().find(|level| level.label() == label) {
        Some(CefrLevel::A1 | CefrLevel::A2) => label.green().bold(),
        Some(CefrLevel::B1 | CefrLevel::B2) => label.yellow().bold(),
        Some(CefrLevel::C1 | CefrLevel::C2) => label.magenta().bold(),
        None => label.bold(),
    }
}
