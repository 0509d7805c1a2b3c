//! Saving scored tables to disk

use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::pipeline::error::PipelineError;

/// Write a prediction table to `path`, picking the format from the
/// extension: `.csv` or `.parquet`.
pub fn save_predictions(df: &mut DataFrame, path: &Path) -> Result<(), PipelineError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => {
            let file = File::create(path).map_err(|e| file_error(path, e))?;
            CsvWriter::new(file)
                .include_header(true)
                .finish(df)
                .map_err(|e| file_error(path, e))?;
        }
        "parquet" => {
            let file = File::create(path).map_err(|e| file_error(path, e))?;
            ParquetWriter::new(file)
                .finish(df)
                .map_err(|e| file_error(path, e))?;
        }
        other => {
            return Err(PipelineError::Runtime(format!(
                "unsupported output format '.{other}', use .csv or .parquet"
            )));
        }
    }
    Ok(())
}

fn file_error(path: &Path, reason: impl std::fmt::Display) -> PipelineError {
    PipelineError::File {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
