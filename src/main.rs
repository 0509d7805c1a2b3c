//! Jobfit: Employee Attrition Prediction Tool
//!
//! Trains a random forest on a historical attrition dataset and scores
//! a user-supplied employee table, either through the interactive shell
//! or directly from the command line.

mod cli;
mod pipeline;
mod report;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::{run_prediction, run_shell, Cli, RunOptions};
use utils::styling::{print_banner, print_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = RunOptions {
        training: cli.training_path(),
        input: cli.input.clone(),
        output: cli.output_path(),
        forest: cli.forest_config(),
        holdout_fraction: cli.holdout,
        report_json: cli.report_json.clone(),
    };

    if cli.no_confirm {
        // Non-interactive: the input must be given up front
        let input = options.input.as_ref().ok_or_else(|| {
            anyhow::anyhow!("Input file is required with --no-confirm. Use -i/--input to specify a file.")
        })?;

        print_banner(env!("CARGO_PKG_VERSION"));
        print_config(
            &options.training,
            Some(input.as_path()),
            options.output.as_deref(),
            options.forest.n_trees,
            options.holdout_fraction,
        );

        run_prediction(&options)?;
        return Ok(());
    }

    run_shell(options)
}
