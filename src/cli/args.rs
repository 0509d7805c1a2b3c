//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::{default_training_path, ForestConfig, DEFAULT_HOLDOUT, DEFAULT_SEED};

/// Jobfit - Predict employee attrition with a random forest classifier
#[derive(Parser, Debug)]
#[command(name = "jobfit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Training file path (CSV or Parquet). Must contain the
    /// 'Employee_ID' and 'Attrition' columns; every other column is
    /// treated as a feature. Defaults to
    /// ~/employee_attrition_dataset.csv.
    #[arg(short = 'T', long)]
    pub training: Option<PathBuf>,

    /// Input file path with employees to score (CSV or Parquet).
    /// If not provided, selected interactively from the shell.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file path (CSV or Parquet, determined by extension).
    /// Defaults to input directory with '_predictions' suffix
    /// (e.g., staff.csv -> staff_predictions.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of trees in the forest
    #[arg(long, default_value = "100")]
    pub trees: usize,

    /// Maximum tree depth (unlimited when omitted)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Holdout fraction for validation, exclusive between 0 and 1
    #[arg(long, default_value_t = DEFAULT_HOLDOUT, value_parser = validate_holdout)]
    pub holdout: f64,

    /// RNG seed for the train/holdout split and forest training
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write the evaluation report as JSON to this path
    #[arg(long)]
    pub report_json: Option<PathBuf>,

    /// Skip the interactive shell and run directly with the given paths
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,
}

impl Cli {
    /// The training path, falling back to the home-directory default.
    pub fn training_path(&self) -> PathBuf {
        self.training.clone().unwrap_or_else(default_training_path)
    }

    /// The output path, deriving from input if not explicitly provided.
    /// The derived path sits next to the input with a '_predictions' suffix.
    pub fn output_path(&self) -> Option<PathBuf> {
        if let Some(output) = &self.output {
            return Some(output.clone());
        }
        let input = self.input.as_ref()?;
        let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let extension = input.extension().and_then(|e| e.to_str()).unwrap_or("csv");
        Some(parent.join(format!("{}_predictions.{}", stem, extension)))
    }

    /// Forest parameters assembled from the flags.
    pub fn forest_config(&self) -> ForestConfig {
        ForestConfig::default()
            .with_trees(self.trees)
            .with_max_depth(self.max_depth)
            .with_seed(self.seed)
    }
}

/// Validator for the holdout fraction
fn validate_holdout(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value <= 0.0 || value >= 1.0 {
        Err(format!(
            "holdout must be strictly between 0.0 and 1.0, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_derives_from_input_stem() {
        let cli = Cli::parse_from(["jobfit", "--input", "/data/staff.csv"]);
        assert_eq!(
            cli.output_path().unwrap(),
            PathBuf::from("/data/staff_predictions.csv")
        );
    }

    #[test]
    fn explicit_output_wins() {
        let cli = Cli::parse_from(["jobfit", "-i", "staff.csv", "-o", "/tmp/out.csv"]);
        assert_eq!(cli.output_path().unwrap(), PathBuf::from("/tmp/out.csv"));
    }

    #[test]
    fn defaults_come_from_pipeline_constants() {
        let cli = Cli::parse_from(["jobfit"]);
        assert_eq!(cli.holdout, DEFAULT_HOLDOUT);
        assert_eq!(cli.seed, DEFAULT_SEED);
    }

    #[test]
    fn holdout_outside_range_is_rejected() {
        assert!(Cli::try_parse_from(["jobfit", "--holdout", "1.0"]).is_err());
        assert!(Cli::try_parse_from(["jobfit", "--holdout", "0.0"]).is_err());
        assert!(Cli::try_parse_from(["jobfit", "--holdout", "0.25"]).is_ok());
    }
}
