//! Training session and prediction orchestration
//!
//! A run produces an explicit [`TrainedSession`] value holding the
//! derived feature contract, the encoded reference schema, the fitted
//! forest, and the holdout evaluation. The session is created fresh per
//! run and handed to the prediction step; nothing lives on the shell.

use polars::prelude::*;

use crate::pipeline::align::align_to_schema;
use crate::pipeline::columns::{
    CLASS_NAMES, ID_COLUMN, LABEL_COLUMN, PREDICTION_COLUMN, PREDICTION_LABEL_COLUMN,
};
use crate::pipeline::encode::encode_features;
use crate::pipeline::error::PipelineError;
use crate::pipeline::eval::{evaluate, EvaluationReport};
use crate::pipeline::forest::{ForestConfig, RandomForest};
use crate::pipeline::split::holdout_split;
use crate::pipeline::validate::require_columns;

/// Everything the prediction step needs from training, as one value.
#[derive(Debug)]
pub struct TrainedSession {
    /// Raw feature columns the prediction table must carry.
    pub feature_columns: Vec<String>,
    /// Encoded reference schema any input is aligned into.
    pub schema: Vec<String>,
    /// The fitted ensemble.
    pub forest: RandomForest,
    /// Holdout evaluation, informational only.
    pub evaluation: EvaluationReport,
}

/// A scored prediction table plus run bookkeeping.
#[derive(Debug)]
pub struct Scored {
    /// Original input table with `Prediction` and `Prediction_Label`
    /// columns appended.
    pub frame: DataFrame,
    pub yes_count: usize,
    pub no_count: usize,
    /// Schema columns the input lacked (zero-filled during alignment).
    pub filled: Vec<String>,
    /// Encoded input columns unknown to the schema (dropped).
    pub dropped: Vec<String>,
}

/// Train on the loaded training table: validate, derive features, encode,
/// split 70/30, fit, and evaluate on the holdout.
pub fn train_session(
    df: &DataFrame,
    config: &ForestConfig,
    holdout_fraction: f64,
) -> Result<TrainedSession, PipelineError> {
    require_columns(df, &[ID_COLUMN, LABEL_COLUMN], "training data")?;

    let labels = extract_labels(df)?;
    let features = df.drop_many([ID_COLUMN, LABEL_COLUMN]);
    if features.width() == 0 {
        return Err(PipelineError::Runtime(
            "training data has no feature columns".to_string(),
        ));
    }

    let feature_columns: Vec<String> = features
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let encoded = encode_features(&features)?;
    let rows = encoded.to_rows();

    let (train_idx, holdout_idx) = holdout_split(rows.len(), holdout_fraction, config.seed);
    if holdout_idx.is_empty() {
        return Err(PipelineError::Runtime(format!(
            "training data has too few rows ({}) for a holdout split",
            rows.len()
        )));
    }

    let train_rows: Vec<Vec<f64>> = train_idx.iter().map(|&i| rows[i].clone()).collect();
    let train_labels: Vec<usize> = train_idx.iter().map(|&i| labels[i]).collect();
    let forest = RandomForest::fit(config, &train_rows, &train_labels)?;

    let holdout_rows: Vec<Vec<f64>> = holdout_idx.iter().map(|&i| rows[i].clone()).collect();
    let holdout_labels: Vec<usize> = holdout_idx.iter().map(|&i| labels[i]).collect();
    let predicted = forest.predict_batch(&holdout_rows)?;
    let evaluation = evaluate(&holdout_labels, &predicted, &CLASS_NAMES)?;

    Ok(TrainedSession {
        feature_columns,
        schema: encoded.columns().to_vec(),
        forest,
        evaluation,
    })
}

impl TrainedSession {
    /// Score an input table: validate the feature contract, encode, align
    /// to the training schema, predict, and append the two prediction
    /// columns to the original table.
    ///
    /// Identifier and label columns are allowed but ignored; they are
    /// stripped before encoding so alignment drift reflects real feature
    /// differences.
    pub fn score(&self, input: &DataFrame) -> Result<Scored, PipelineError> {
        require_columns(input, &self.feature_columns, "prediction input")?;

        let feature_view = input.drop_many([ID_COLUMN, LABEL_COLUMN]);
        let encoded = encode_features(&feature_view)?;
        let aligned = align_to_schema(&encoded, &self.schema);

        let predictions = self.forest.predict_batch(&aligned.table.to_rows())?;
        let yes_count = predictions.iter().filter(|&&p| p == 1).count();
        let no_count = predictions.len() - yes_count;

        let raw: Vec<i32> = predictions.iter().map(|&p| p as i32).collect();
        let readable: Vec<&str> = predictions
            .iter()
            .map(|&p| CLASS_NAMES.get(p).copied().unwrap_or("Yes"))
            .collect();

        let mut frame = input.clone();
        frame.with_column(Column::new(PREDICTION_COLUMN.into(), raw))?;
        frame.with_column(Column::new(PREDICTION_LABEL_COLUMN.into(), readable))?;

        Ok(Scored {
            frame,
            yes_count,
            no_count,
            filled: aligned.filled,
            dropped: aligned.dropped,
        })
    }
}

/// Read the binary label column: numeric 0/1, boolean, or "Yes"/"No".
fn extract_labels(df: &DataFrame) -> Result<Vec<usize>, PipelineError> {
    let col = df.column(LABEL_COLUMN)?;

    if col.dtype().is_primitive_numeric() {
        let values = col.cast(&DataType::Float64)?;
        return values
            .f64()?
            .into_iter()
            .enumerate()
            .map(|(i, v)| match v {
                Some(v) if v == 0.0 => Ok(0),
                Some(v) if v == 1.0 => Ok(1),
                Some(v) => Err(PipelineError::Runtime(format!(
                    "label column '{LABEL_COLUMN}' must be binary 0/1, found {v} at row {i}"
                ))),
                None => Err(PipelineError::Runtime(format!(
                    "label column '{LABEL_COLUMN}' has a null at row {i}"
                ))),
            })
            .collect();
    }

    if col.dtype() == &DataType::Boolean {
        return col
            .bool()?
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                v.map(usize::from).ok_or_else(|| {
                    PipelineError::Runtime(format!(
                        "label column '{LABEL_COLUMN}' has a null at row {i}"
                    ))
                })
            })
            .collect();
    }

    let cast = col.cast(&DataType::String)?;
    cast.str()?
        .into_iter()
        .enumerate()
        .map(|(i, v)| match v {
            Some("Yes") => Ok(1),
            Some("No") => Ok(0),
            Some(other) => Err(PipelineError::Runtime(format!(
                "label column '{LABEL_COLUMN}' must be 0/1 or Yes/No, found '{other}' at row {i}"
            ))),
            None => Err(PipelineError::Runtime(format!(
                "label column '{LABEL_COLUMN}' has a null at row {i}"
            ))),
        })
        .collect()
}
