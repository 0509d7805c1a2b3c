//! Holdout evaluation: confusion matrix and per-class metrics

use serde::Serialize;

use crate::pipeline::error::PipelineError;

/// A confusion matrix; `matrix[true_class][predicted_class]`.
#[derive(Debug, Clone)]
pub struct ConfusionMatrix {
    matrix: Vec<Vec<usize>>,
    n_classes: usize,
}

/// Per-class precision, recall, and F1. Undefined metrics (no predicted
/// members, no true members) report as zero rather than failing.
#[derive(Debug, Clone, Serialize)]
pub struct ClassMetrics {
    /// Display name of the class.
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of true samples in this class.
    pub support: usize,
}

/// Accuracy plus per-class summary over the holdout split.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub accuracy: f64,
    pub classes: Vec<ClassMetrics>,
    /// Size of the holdout split the report was computed on.
    pub n_validation: usize,
}

impl ConfusionMatrix {
    /// Build from parallel true/predicted label slices.
    pub fn from_labels(
        true_labels: &[usize],
        predicted: &[usize],
        n_classes: usize,
    ) -> Result<Self, PipelineError> {
        if true_labels.is_empty() {
            return Err(PipelineError::Runtime(
                "cannot evaluate on zero samples".to_string(),
            ));
        }
        if true_labels.len() != predicted.len() {
            return Err(PipelineError::Runtime(format!(
                "true labels ({}) and predictions ({}) differ in length",
                true_labels.len(),
                predicted.len()
            )));
        }
        let mut matrix = vec![vec![0usize; n_classes]; n_classes];
        for (&t, &p) in true_labels.iter().zip(predicted.iter()) {
            matrix[t][p] += 1;
        }
        Ok(Self { matrix, n_classes })
    }

    /// Proportion of correct predictions.
    pub fn accuracy(&self) -> f64 {
        let correct: usize = (0..self.n_classes).map(|i| self.matrix[i][i]).sum();
        let total: usize = self.matrix.iter().flat_map(|row| row.iter()).sum();
        if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        }
    }

    /// Per-class precision/recall/F1/support, zero where undefined.
    pub fn class_metrics(&self, class_names: &[&str]) -> Vec<ClassMetrics> {
        (0..self.n_classes)
            .map(|c| {
                let tp = self.matrix[c][c];
                let fp: usize = (0..self.n_classes)
                    .filter(|&i| i != c)
                    .map(|i| self.matrix[i][c])
                    .sum();
                let fn_: usize = (0..self.n_classes)
                    .filter(|&j| j != c)
                    .map(|j| self.matrix[c][j])
                    .sum();
                let support = tp + fn_;
                let precision = if tp + fp == 0 {
                    0.0
                } else {
                    tp as f64 / (tp + fp) as f64
                };
                let recall = if support == 0 {
                    0.0
                } else {
                    tp as f64 / support as f64
                };
                let f1 = if precision + recall == 0.0 {
                    0.0
                } else {
                    2.0 * precision * recall / (precision + recall)
                };
                ClassMetrics {
                    label: class_names
                        .get(c)
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| format!("class_{c}")),
                    precision,
                    recall,
                    f1,
                    support,
                }
            })
            .collect()
    }
}

/// Score predictions against true labels into an evaluation report.
pub fn evaluate(
    true_labels: &[usize],
    predicted: &[usize],
    class_names: &[&str],
) -> Result<EvaluationReport, PipelineError> {
    let n_classes = class_names.len().max(2);
    let cm = ConfusionMatrix::from_labels(true_labels, predicted, n_classes)?;
    Ok(EvaluationReport {
        accuracy: cm.accuracy(),
        classes: cm.class_metrics(class_names),
        n_validation: true_labels.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 2] = ["No", "Yes"];

    #[test]
    fn perfect_predictions() {
        let report = evaluate(&[0, 0, 1, 1], &[0, 0, 1, 1], &NAMES).unwrap();
        assert!((report.accuracy - 1.0).abs() < f64::EPSILON);
        for class in &report.classes {
            assert!((class.precision - 1.0).abs() < f64::EPSILON);
            assert!((class.recall - 1.0).abs() < f64::EPSILON);
            assert!((class.f1 - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn known_metrics() {
        // true: [0,0,0,1,1,1]  pred: [0,0,1,1,1,0]
        let report = evaluate(&[0, 0, 0, 1, 1, 1], &[0, 0, 1, 1, 1, 0], &NAMES).unwrap();
        assert!((report.accuracy - 4.0 / 6.0).abs() < 1e-10);
        let no = &report.classes[0];
        assert_eq!(no.label, "No");
        assert!((no.precision - 2.0 / 3.0).abs() < 1e-10);
        assert!((no.recall - 2.0 / 3.0).abs() < 1e-10);
        assert_eq!(no.support, 3);
    }

    #[test]
    fn undefined_metrics_report_zero() {
        // Class "Yes" never appears in truth or predictions.
        let report = evaluate(&[0, 0, 0], &[0, 0, 0], &NAMES).unwrap();
        let yes = &report.classes[1];
        assert_eq!(yes.support, 0);
        assert_eq!(yes.precision, 0.0);
        assert_eq!(yes.recall, 0.0);
        assert_eq!(yes.f1, 0.0);
        assert!((report.accuracy - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_labels_error() {
        assert!(evaluate(&[], &[], &NAMES).is_err());
    }

    #[test]
    fn length_mismatch_error() {
        assert!(evaluate(&[0, 1], &[0], &NAMES).is_err());
    }
}
