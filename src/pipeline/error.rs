//! Pipeline error types

use std::path::PathBuf;

use polars::prelude::PolarsError;

/// Errors raised by the prediction pipeline.
///
/// Every failure during a run maps onto one of three kinds: an unreadable
/// or malformed file, a table missing required columns, or any other
/// runtime failure (encoding, training, prediction, writing).
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The file at `path` could not be read or parsed.
    #[error("Failed to read {}: {reason}", path.display())]
    File {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying reason from the reader.
        reason: String,
    },

    /// Required columns are absent. The message enumerates every missing
    /// column, not just the first.
    #[error("Missing columns in {table}: {}", missing.join(", "))]
    Schema {
        /// Human-readable name of the table that was validated.
        table: String,
        /// All required column names absent from the table.
        missing: Vec<String>,
    },

    /// Any other failure during encoding, training, prediction, or writing.
    #[error("{0}")]
    Runtime(String),
}

impl From<PolarsError> for PipelineError {
    fn from(err: PolarsError) -> Self {
        PipelineError::Runtime(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_lists_every_missing_column() {
        let err = PipelineError::Schema {
            table: "prediction input".to_string(),
            missing: vec!["Department".to_string(), "Salary".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("Department"));
        assert!(message.contains("Salary"));
        assert!(message.contains("prediction input"));
    }

    #[test]
    fn file_error_includes_path() {
        let err = PipelineError::File {
            path: PathBuf::from("/tmp/missing.csv"),
            reason: "no such file".to_string(),
        };
        assert!(err.to_string().contains("missing.csv"));
    }
}
