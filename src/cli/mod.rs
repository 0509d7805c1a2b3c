//! CLI module - argument parsing, prompts, the run sequence, and the
//! interactive shell

mod args;
mod prompts;
mod run;
mod shell;

pub use args::Cli;
pub use prompts::*;
pub use run::{run_prediction, RunOptions, RunOutcome};
pub use shell::run_shell;
