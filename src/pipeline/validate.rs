//! Required-column validation

use polars::prelude::*;

use crate::pipeline::error::PipelineError;

/// Check that every name in `required` is a column of `df`.
///
/// Fails with a schema error enumerating every missing column, not just
/// the first.
pub fn require_columns<S: AsRef<str>>(
    df: &DataFrame,
    required: &[S],
    table_name: &str,
) -> Result<(), PipelineError> {
    let present: Vec<&str> = df.get_column_names().iter().map(|s| s.as_str()).collect();

    let missing: Vec<String> = required
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| !present.contains(name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::Schema {
            table: table_name.to_string(),
            missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        df! {
            "Department" => ["Sales", "Eng"],
            "Salary" => [1000.0f64, 2000.0],
        }
        .unwrap()
    }

    #[test]
    fn all_present_passes() {
        let df = sample_frame();
        assert!(require_columns(&df, &["Department", "Salary"], "training data").is_ok());
    }

    #[test]
    fn empty_required_list_passes() {
        let df = sample_frame();
        let required: [&str; 0] = [];
        assert!(require_columns(&df, &required, "training data").is_ok());
    }

    #[test]
    fn failure_enumerates_every_missing_column() {
        let df = sample_frame();
        let err = require_columns(&df, &["Department", "Age", "Overtime"], "prediction input")
            .unwrap_err();
        match &err {
            PipelineError::Schema { table, missing } => {
                assert_eq!(table, "prediction input");
                assert_eq!(missing, &["Age".to_string(), "Overtime".to_string()]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("Age"));
        assert!(message.contains("Overtime"));
    }

    #[test]
    fn fails_iff_at_least_one_column_absent() {
        let df = sample_frame();
        assert!(require_columns(&df, &["Salary"], "t").is_ok());
        assert!(require_columns(&df, &["Salary", "Nope"], "t").is_err());
    }
}
