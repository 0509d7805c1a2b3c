//! Tests for table loading

use jobfit::pipeline::{load_table, PipelineError};
use std::io::Write;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_load_csv_file() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "a,b,c").unwrap();
    writeln!(file, "1,2,3").unwrap();
    writeln!(file, "4,5,6").unwrap();
    drop(file);

    let df = load_table(&csv_path).unwrap();

    assert_eq!(df.height(), 2, "Should have 2 data rows");
    assert_eq!(df.width(), 3, "Should have 3 columns");
    assert_eq!(df.get_column_names(), &["a", "b", "c"]);
}

#[test]
fn test_load_parquet_file() {
    let mut df = create_frame();
    let (_dir, parquet_path) = common::create_temp_parquet(&mut df);

    let loaded = load_table(&parquet_path).unwrap();

    assert_eq!(loaded.height(), 3);
    assert_eq!(loaded.get_column_names(), &["x", "y"]);
}

#[test]
fn test_missing_file_is_file_error() {
    let err = load_table(std::path::Path::new("/no/such/file.csv")).unwrap_err();
    assert!(matches!(err, PipelineError::File { .. }));
    assert!(err.to_string().contains("/no/such/file.csv"));
}

#[test]
fn test_unknown_extension_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.xlsx");
    std::fs::write(&path, b"not a table").unwrap();

    assert!(load_table(&path).is_err());
}

fn create_frame() -> polars::prelude::DataFrame {
    use polars::prelude::*;
    df! {
        "x" => [1i32, 2, 3],
        "y" => [4i32, 5, 6],
    }
    .unwrap()
}
