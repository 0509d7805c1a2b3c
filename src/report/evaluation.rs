//! Holdout evaluation display and JSON export

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

use crate::pipeline::EvaluationReport;

/// Metadata about the training run
#[derive(Serialize)]
pub struct EvaluationMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Jobfit version
    pub jobfit_version: String,
    /// Training file path
    pub training_file: String,
    /// Number of trees in the ensemble
    pub n_trees: usize,
    /// Holdout fraction used for validation
    pub holdout_fraction: f64,
    /// RNG seed
    pub seed: u64,
}

/// Complete evaluation export with metadata
#[derive(Serialize)]
pub struct EvaluationExport<'a> {
    pub metadata: EvaluationMetadata,
    #[serde(flatten)]
    pub report: &'a EvaluationReport,
}

/// Print the validation accuracy and per-class metrics table.
pub fn display_evaluation(report: &EvaluationReport) {
    println!();
    println!(
        "    {} {}",
        style("📊").cyan(),
        style("MODEL EVALUATION").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();
    println!(
        "    Validation Accuracy: {}  {}",
        style(format!("{:.4}", report.accuracy)).green().bold(),
        style(format!("({} holdout rows)", report.n_validation)).dim()
    );
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Class").add_attribute(Attribute::Bold),
        Cell::new("Precision").add_attribute(Attribute::Bold),
        Cell::new("Recall").add_attribute(Attribute::Bold),
        Cell::new("F1").add_attribute(Attribute::Bold),
        Cell::new("Support").add_attribute(Attribute::Bold),
    ]);

    for class in &report.classes {
        table.add_row(vec![
            Cell::new(&class.label),
            metric_cell(class.precision),
            metric_cell(class.recall),
            metric_cell(class.f1),
            Cell::new(class.support),
        ]);
    }

    // Indent the table
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

fn metric_cell(value: f64) -> Cell {
    let color = if value >= 0.8 {
        Color::Green
    } else if value >= 0.5 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(format!("{:.4}", value)).fg(color)
}

/// Write the evaluation report (with run metadata) to a JSON file.
pub fn export_evaluation_json(
    report: &EvaluationReport,
    output_path: &Path,
    training_file: &str,
    n_trees: usize,
    holdout_fraction: f64,
    seed: u64,
) -> Result<()> {
    let export = EvaluationExport {
        metadata: EvaluationMetadata {
            timestamp: Utc::now().to_rfc3339(),
            jobfit_version: env!("CARGO_PKG_VERSION").to_string(),
            training_file: training_file.to_string(),
            n_trees,
            holdout_fraction,
            seed,
        },
        report,
    };

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize evaluation report to JSON")?;

    std::fs::write(output_path, json).with_context(|| {
        format!(
            "Failed to write evaluation report to {}",
            output_path.display()
        )
    })?;

    Ok(())
}
