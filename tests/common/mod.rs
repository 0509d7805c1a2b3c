//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a training DataFrame with a learnable attrition signal
///
/// Columns:
/// - `Employee_ID`: identifier, dropped before training
/// - `Attrition`: binary target (1 for low-salary rows)
/// - `Department`: categorical feature (Sales/Eng)
/// - `Salary`: numeric feature separating the classes
pub fn create_training_dataframe() -> DataFrame {
    let n = 40;
    let ids: Vec<i64> = (1..=n as i64).collect();
    let attrition: Vec<i32> = (0..n).map(|i| if i % 2 == 0 { 1 } else { 0 }).collect();
    let department: Vec<&str> = (0..n)
        .map(|i| if i % 4 < 2 { "Sales" } else { "Eng" })
        .collect();
    let salary: Vec<f64> = (0..n)
        .map(|i| {
            if i % 2 == 0 {
                2000.0 + i as f64 * 10.0
            } else {
                9000.0 + i as f64 * 10.0
            }
        })
        .collect();

    df! {
        "Employee_ID" => ids,
        "Attrition" => attrition,
        "Department" => department,
        "Salary" => salary,
    }
    .unwrap()
}

/// Create an input DataFrame carrying the training feature columns
pub fn create_input_dataframe() -> DataFrame {
    df! {
        "Employee_ID" => [101i64, 102, 103, 104],
        "Department" => ["Sales", "Eng", "Sales", "Eng"],
        "Salary" => [2100.0f64, 9500.0, 2300.0, 9100.0],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}
