//! The staged prediction run: load, train, evaluate, score, save

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use crate::pipeline::{load_table, save_predictions, train_session, ForestConfig};
use crate::report::{display_evaluation, export_evaluation_json, RunSummary};
use crate::utils::progress::{create_spinner, finish_with_success};
use crate::utils::styling::{
    print_info, print_step_header, print_success, print_warning,
};

/// Everything one run needs, resolved before it starts.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub training: PathBuf,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub forest: ForestConfig,
    pub holdout_fraction: f64,
    pub report_json: Option<PathBuf>,
}

/// How a run ended. Missing selections are warnings, not errors: the
/// model still trains and reports its accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    MissingInput,
    MissingOutput,
}

/// Run the full sequence. Training always happens and the evaluation is
/// always shown; scoring and saving only happen when input and output
/// paths are both selected.
pub fn run_prediction(options: &RunOptions) -> Result<RunOutcome> {
    print_step_header(1, "Train Model");

    let train_start = Instant::now();
    let spinner = create_spinner("Loading training data...");
    let training_df = load_table(&options.training)?;
    finish_with_success(
        &spinner,
        &format!(
            "Training data loaded ({} rows, {} columns)",
            training_df.height(),
            training_df.width()
        ),
    );

    let spinner = create_spinner(&format!(
        "Training forest ({} trees)...",
        options.forest.n_trees
    ));
    let session = train_session(&training_df, &options.forest, options.holdout_fraction)?;
    finish_with_success(&spinner, "Model trained");
    let training_duration = train_start.elapsed();

    display_evaluation(&session.evaluation);

    if let Some(report_path) = &options.report_json {
        export_evaluation_json(
            &session.evaluation,
            report_path,
            &options.training.display().to_string(),
            options.forest.n_trees,
            options.holdout_fraction,
            options.forest.seed,
        )?;
        print_info(&format!(
            "Evaluation report written to {}",
            report_path.display()
        ));
    }

    let Some(input) = &options.input else {
        println!();
        print_warning("No input file selected; skipping prediction.");
        return Ok(RunOutcome::MissingInput);
    };
    let Some(output) = &options.output else {
        println!();
        print_warning("No output file selected; skipping prediction.");
        return Ok(RunOutcome::MissingOutput);
    };

    print_step_header(2, "Score Input");

    let score_start = Instant::now();
    let spinner = create_spinner("Loading input data...");
    let input_df = load_table(input)?;
    finish_with_success(
        &spinner,
        &format!("Input data loaded ({} rows)", input_df.height()),
    );

    let spinner = create_spinner("Scoring...");
    let mut scored = session.score(&input_df)?;
    finish_with_success(&spinner, "Predictions generated");
    let scoring_duration = score_start.elapsed();

    if !scored.filled.is_empty() || !scored.dropped.is_empty() {
        print_warning(&format!(
            "Input schema drifted from training: {} missing column(s) zero-filled, {} unknown column(s) ignored",
            scored.filled.len(),
            scored.dropped.len()
        ));
        for name in &scored.filled {
            print_info(&format!("zero-filled: {}", name));
        }
        for name in &scored.dropped {
            print_info(&format!("ignored: {}", name));
        }
    }

    print_step_header(3, "Save Predictions");

    let spinner = create_spinner("Writing output file...");
    save_predictions(&mut scored.frame, output)?;
    finish_with_success(&spinner, &format!("Saved to {}", output.display()));

    let summary = RunSummary {
        rows_scored: scored.frame.height(),
        yes_count: scored.yes_count,
        no_count: scored.no_count,
        output_path: Some(output.clone()),
        training_duration,
        scoring_duration,
    };
    summary.display();

    print_success(&format!(
        "Predicted attrition for {} employee(s): {} Yes, {} No",
        summary.rows_scored, summary.yes_count, summary.no_count
    ));

    Ok(RunOutcome::Completed)
}
