//! One-hot feature encoding
//!
//! Categorical columns expand into one indicator column per observed
//! category, named `{column}_{category}` in first-seen order. Numeric and
//! boolean columns pass through as `f64` and come first in the encoded
//! schema, followed by the indicator groups, each block keeping source
//! column order. Tables encoded separately can still disagree on the
//! observed categories, so they must be aligned to a common schema
//! before prediction.

use std::collections::HashMap;

use polars::prelude::*;

use crate::pipeline::error::PipelineError;

/// A fixed-width numeric table: ordered column names over column-major
/// `f64` data.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedTable {
    columns: Vec<String>,
    data: Vec<Vec<f64>>,
    n_rows: usize,
}

impl EncodedTable {
    /// Build a table from ordered columns. Every column must have the
    /// same length.
    pub fn new(columns: Vec<String>, data: Vec<Vec<f64>>) -> Result<Self, PipelineError> {
        if columns.len() != data.len() {
            return Err(PipelineError::Runtime(format!(
                "encoded table has {} names but {} columns",
                columns.len(),
                data.len()
            )));
        }
        let n_rows = data.first().map(|c| c.len()).unwrap_or(0);
        if let Some(bad) = data.iter().position(|c| c.len() != n_rows) {
            return Err(PipelineError::Runtime(format!(
                "encoded column '{}' has {} rows, expected {}",
                columns[bad],
                data[bad].len(),
                n_rows
            )));
        }
        Ok(Self {
            columns,
            data,
            n_rows,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Column values by name, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(&self.data[idx])
    }

    /// Materialize row-major feature vectors for the classifier.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.n_rows)
            .map(|r| self.data.iter().map(|col| col[r]).collect())
            .collect()
    }
}

/// One-hot encode every categorical column of `df`; numeric and boolean
/// columns pass through unchanged in value. Passthrough columns come
/// first, indicator groups after, both in source order.
pub fn encode_features(df: &DataFrame) -> Result<EncodedTable, PipelineError> {
    let n_rows = df.height();
    let mut columns = Vec::new();
    let mut data = Vec::new();

    let (numeric, categorical): (Vec<&Column>, Vec<&Column>) = df
        .get_columns()
        .iter()
        .partition(|col| col.dtype().is_primitive_numeric() || col.dtype() == &DataType::Boolean);

    for col in numeric {
        columns.push(col.name().to_string());
        data.push(numeric_values(col)?);
    }
    for col in categorical {
        let name = col.name().to_string();
        let values = string_values(col)?;
        let (cat_names, mut indicators) = one_hot(&name, &values, n_rows);
        columns.extend(cat_names);
        data.append(&mut indicators);
    }

    EncodedTable::new(columns, data)
}

/// Expand one categorical column into indicator columns, first-seen order.
/// Null cells contribute a zero to every indicator.
fn one_hot(name: &str, values: &[Option<String>], n_rows: usize) -> (Vec<String>, Vec<Vec<f64>>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut categories: Vec<&str> = Vec::new();
    for value in values.iter().flatten() {
        if !seen.contains_key(value.as_str()) {
            seen.insert(value.as_str(), categories.len());
            categories.push(value.as_str());
        }
    }

    let mut indicators = vec![vec![0.0; n_rows]; categories.len()];
    for (row, value) in values.iter().enumerate() {
        if let Some(v) = value {
            indicators[seen[v.as_str()]][row] = 1.0;
        }
    }

    let names = categories
        .iter()
        .map(|cat| format!("{}_{}", name, cat))
        .collect();
    (names, indicators)
}

/// Numeric column as `f64`, nulls encoded as `0.0`.
fn numeric_values(col: &Column) -> Result<Vec<f64>, PipelineError> {
    let cast = col.cast(&DataType::Float64)?;
    Ok(cast.f64()?.into_iter().map(|v| v.unwrap_or(0.0)).collect())
}

/// Column cells as strings, preserving nulls.
fn string_values(col: &Column) -> Result<Vec<Option<String>>, PipelineError> {
    let values = match col.dtype() {
        DataType::String => col
            .str()?
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect(),
        _ => {
            let cast = col.cast(&DataType::String)?;
            cast.str()?
                .into_iter()
                .map(|v| v.map(|s| s.to_string()))
                .collect()
        }
    };
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_columns_pass_through() {
        let df = df! {
            "Salary" => [1000.0f64, 2000.0, 3000.0],
            "Age" => [25i32, 30, 35],
        }
        .unwrap();

        let encoded = encode_features(&df).unwrap();
        assert_eq!(encoded.columns(), &["Salary", "Age"]);
        assert_eq!(encoded.column("Salary").unwrap(), &[1000.0, 2000.0, 3000.0]);
        assert_eq!(encoded.column("Age").unwrap(), &[25.0, 30.0, 35.0]);
    }

    #[test]
    fn categorical_expansion_uses_first_seen_order() {
        let df = df! {
            "Salary" => [1.0f64, 2.0, 3.0, 4.0],
            "Department" => ["Sales", "Eng", "Sales", "Eng"],
        }
        .unwrap();

        let encoded = encode_features(&df).unwrap();
        assert_eq!(
            encoded.columns(),
            &["Salary", "Department_Sales", "Department_Eng"]
        );
        assert_eq!(
            encoded.column("Department_Sales").unwrap(),
            &[1.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(
            encoded.column("Department_Eng").unwrap(),
            &[0.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn passthrough_columns_precede_indicator_groups() {
        let df = df! {
            "Department" => ["Sales", "Eng", "Sales"],
            "Salary" => [1.0f64, 2.0, 3.0],
        }
        .unwrap();

        let encoded = encode_features(&df).unwrap();
        assert_eq!(
            encoded.columns(),
            &["Salary", "Department_Sales", "Department_Eng"]
        );
    }

    #[test]
    fn null_category_contributes_no_indicator() {
        let df = df! {
            "Department" => [Some("Sales"), None, Some("Eng")],
        }
        .unwrap();

        let encoded = encode_features(&df).unwrap();
        assert_eq!(encoded.columns(), &["Department_Sales", "Department_Eng"]);
        assert_eq!(encoded.column("Department_Sales").unwrap(), &[1.0, 0.0, 0.0]);
        assert_eq!(encoded.column("Department_Eng").unwrap(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn numeric_nulls_become_zero() {
        let df = df! {
            "Salary" => [Some(1.5f64), None, Some(2.5)],
        }
        .unwrap();

        let encoded = encode_features(&df).unwrap();
        assert_eq!(encoded.column("Salary").unwrap(), &[1.5, 0.0, 2.5]);
    }

    #[test]
    fn boolean_passes_through_as_zero_one() {
        let df = df! {
            "Overtime" => [true, false, true],
        }
        .unwrap();

        let encoded = encode_features(&df).unwrap();
        assert_eq!(encoded.columns(), &["Overtime"]);
        assert_eq!(encoded.column("Overtime").unwrap(), &[1.0, 0.0, 1.0]);
    }

    #[test]
    fn to_rows_is_row_major() {
        let table = EncodedTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        )
        .unwrap();
        assert_eq!(table.to_rows(), vec![vec![1.0, 3.0], vec![2.0, 4.0]]);
    }

    #[test]
    fn ragged_columns_rejected() {
        let result = EncodedTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![1.0, 2.0], vec![3.0]],
        );
        assert!(result.is_err());
    }
}
