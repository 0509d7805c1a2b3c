//! Run summary report generation

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of a completed prediction run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rows_scored: usize,
    pub yes_count: usize,
    pub no_count: usize,
    pub output_path: Option<PathBuf>,
    pub training_duration: Duration,
    pub scoring_duration: Duration,
}

impl RunSummary {
    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RUN SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Rows Scored"),
            Cell::new(self.rows_scored),
        ]);

        table.add_row(vec![
            Cell::new("🔴 Predicted Attrition (Yes)"),
            Cell::new(self.yes_count).fg(if self.yes_count == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("🟢 Predicted Retention (No)"),
            Cell::new(self.no_count).fg(Color::Green),
        ]);

        if let Some(path) = &self.output_path {
            table.add_row(vec![
                Cell::new("💾 Output File"),
                Cell::new(path.display())
                    .fg(Color::Cyan)
                    .add_attribute(Attribute::Bold),
            ]);
        }

        table.add_row(vec![
            Cell::new("⏱️  Training Time"),
            Cell::new(format!("{:.2}s", self.training_duration.as_secs_f64())),
        ]);

        table.add_row(vec![
            Cell::new("⏱️  Scoring Time"),
            Cell::new(format!("{:.2}s", self.scoring_duration.as_secs_f64())),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
