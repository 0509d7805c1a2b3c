//! Schema alignment
//!
//! Reshapes an encoded table to exactly match a reference column set and
//! order. This is what keeps the classifier from being fed a different
//! feature shape than it was trained on.

use crate::pipeline::encode::EncodedTable;

/// Result of aligning a table to a reference schema, with the drift that
/// alignment had to paper over.
#[derive(Debug)]
pub struct Aligned {
    /// Table with exactly the reference schema's columns, in order.
    pub table: EncodedTable,
    /// Reference columns absent from the input, added as all-zero.
    pub filled: Vec<String>,
    /// Input columns not in the reference, dropped.
    pub dropped: Vec<String>,
}

/// Align `table` to `schema`: columns missing from the table are added
/// with value 0, columns not in the schema are dropped. Total for any
/// input: the result always has exactly the schema's columns.
pub fn align_to_schema(table: &EncodedTable, schema: &[String]) -> Aligned {
    let n_rows = table.n_rows();
    let mut filled = Vec::new();
    let mut data = Vec::with_capacity(schema.len());

    for name in schema {
        match table.column(name) {
            Some(values) => data.push(values.to_vec()),
            None => {
                filled.push(name.clone());
                data.push(vec![0.0; n_rows]);
            }
        }
    }

    let dropped = table
        .columns()
        .iter()
        .filter(|c| !schema.contains(c))
        .cloned()
        .collect();

    // Construction cannot fail: every column was built with n_rows values.
    let aligned = EncodedTable::new(schema.to_vec(), data)
        .expect("aligned columns share the input row count");

    Aligned {
        table: aligned,
        filled,
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(names: &[&str], cols: &[&[f64]]) -> EncodedTable {
        EncodedTable::new(
            names.iter().map(|s| s.to_string()).collect(),
            cols.iter().map(|c| c.to_vec()).collect(),
        )
        .unwrap()
    }

    fn schema(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_columns_fill_with_zero() {
        let t = table(&["a"], &[&[1.0, 2.0]]);
        let aligned = align_to_schema(&t, &schema(&["a", "b"]));

        assert_eq!(aligned.table.columns(), &["a", "b"]);
        assert_eq!(aligned.table.column("b").unwrap(), &[0.0, 0.0]);
        assert_eq!(aligned.filled, vec!["b".to_string()]);
        assert!(aligned.dropped.is_empty());
    }

    #[test]
    fn extra_columns_are_dropped() {
        let t = table(&["a", "junk"], &[&[1.0], &[9.0]]);
        let aligned = align_to_schema(&t, &schema(&["a"]));

        assert_eq!(aligned.table.columns(), &["a"]);
        assert_eq!(aligned.dropped, vec!["junk".to_string()]);
    }

    #[test]
    fn reorders_to_reference_order() {
        let t = table(&["b", "a"], &[&[2.0], &[1.0]]);
        let aligned = align_to_schema(&t, &schema(&["a", "b"]));

        assert_eq!(aligned.table.columns(), &["a", "b"]);
        assert_eq!(aligned.table.column("a").unwrap(), &[1.0]);
        assert_eq!(aligned.table.column("b").unwrap(), &[2.0]);
    }

    #[test]
    fn idempotent_on_already_aligned_table() {
        let t = table(&["a", "b"], &[&[1.0, 2.0], &[3.0, 4.0]]);
        let s = schema(&["a", "b"]);

        let once = align_to_schema(&t, &s);
        let twice = align_to_schema(&once.table, &s);

        assert_eq!(once.table, twice.table);
        assert!(twice.filled.is_empty());
        assert!(twice.dropped.is_empty());
    }

    #[test]
    fn total_for_disjoint_schema() {
        let t = table(&["x"], &[&[5.0, 6.0]]);
        let aligned = align_to_schema(&t, &schema(&["a", "b"]));

        assert_eq!(aligned.table.columns(), &["a", "b"]);
        assert_eq!(aligned.table.column("a").unwrap(), &[0.0, 0.0]);
        assert_eq!(aligned.dropped, vec!["x".to_string()]);
        assert_eq!(aligned.filled.len(), 2);
    }

    #[test]
    fn empty_schema_yields_empty_table() {
        let t = table(&["x"], &[&[5.0]]);
        let aligned = align_to_schema(&t, &schema(&[]));
        assert_eq!(aligned.table.n_cols(), 0);
    }
}
