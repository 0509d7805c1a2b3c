//! Table loader for CSV and Parquet files

use std::path::Path;

use polars::prelude::*;

use crate::pipeline::error::PipelineError;

/// Load a table from a file (CSV or Parquet based on extension).
///
/// No schema validation happens here; that is the validator's job.
pub fn load_table(path: &Path) -> Result<DataFrame, PipelineError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let lf = match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .finish()
            .map_err(|e| file_error(path, e))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .map_err(|e| file_error(path, e))?,
        _ => {
            return Err(PipelineError::File {
                path: path.to_path_buf(),
                reason: format!(
                    "unsupported file format '{}' (supported: csv, parquet)",
                    extension
                ),
            })
        }
    };

    // Collection is where a missing or malformed file actually surfaces.
    lf.collect().map_err(|e| file_error(path, e))
}

fn file_error(path: &Path, err: PolarsError) -> PipelineError {
    PipelineError::File {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
