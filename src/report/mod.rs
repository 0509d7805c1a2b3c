//! Report generation and display

pub mod evaluation;
pub mod summary;

pub use evaluation::{display_evaluation, export_evaluation_json};
pub use summary::RunSummary;
