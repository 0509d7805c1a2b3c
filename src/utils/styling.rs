//! Terminal styling utilities for a modern, visually appealing TUI

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static TREE: Emoji<'_, '_> = Emoji("🌲 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
     ██╗ ██████╗ ██████╗ ███████╗██╗████████╗
     ██║██╔═══██╗██╔══██╗██╔════╝██║╚══██╔══╝
     ██║██║   ██║██████╔╝█████╗  ██║   ██║
██   ██║██║   ██║██╔══██╗██╔══╝  ██║   ██║
╚█████╔╝╚██████╔╝██████╔╝██║     ██║   ██║
 ╚════╝  ╚═════╝ ╚═════╝ ╚═╝     ╚═╝   ╚═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("◆").magenta().bold(),
        style("Employee attrition prediction").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(
    training: &Path,
    input: Option<&Path>,
    output: Option<&Path>,
    n_trees: usize,
    holdout_fraction: f64,
) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Training: {:<37}│",
        TARGET,
        truncate_path(training, 36)
    );
    println!(
        "    │  {} Input:    {:<37}│",
        FOLDER,
        input.map_or_else(|| "(not selected)".to_string(), |p| truncate_path(p, 36))
    );
    println!(
        "    │  {} Output:   {:<37}│",
        SAVE,
        output.map_or_else(|| "(not selected)".to_string(), |p| truncate_path(p, 36))
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Trees:            {:<29}│",
        TREE,
        style(n_trees).yellow()
    );
    println!(
        "    │  {} Holdout fraction: {:<29}│",
        TREE,
        style(format!("{:.0}%", holdout_fraction * 100.0)).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARNING, style(message).yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    println!("    {} {}", style("✗").red().bold(), style(message).red());
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

/// Truncate from the start, counting chars so multi-byte paths stay on
/// boundaries.
fn truncate_string(s: &str, max_len: usize) -> String {
    let n_chars = s.chars().count();
    if n_chars <= max_len {
        return s.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let tail: String = s.chars().skip(n_chars - keep).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_string("staff.csv", 20), "staff.csv");
    }

    #[test]
    fn long_strings_keep_the_tail() {
        let truncated = truncate_string("/very/long/path/to/staff.csv", 15);
        assert_eq!(truncated.chars().count(), 15);
        assert!(truncated.starts_with("..."));
        assert!(truncated.ends_with("staff.csv"));
    }

    #[test]
    fn multibyte_paths_truncate_on_char_boundaries() {
        let path = "/daten/übersicht/prüfbericht_kündigungen.csv";
        let truncated = truncate_string(path, 20);
        assert_eq!(truncated.chars().count(), 20);
        assert!(truncated.ends_with("kündigungen.csv"));
    }
}
