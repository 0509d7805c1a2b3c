//! Random forest classifier: bootstrap-sampled gini trees with
//! majority-vote prediction, trained in parallel.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::pipeline::error::PipelineError;
use crate::pipeline::tree::{DecisionTree, TreeConfig};

/// Forest training parameters.
#[derive(Debug, Clone)]
pub struct ForestConfig {
    pub n_trees: usize,
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            seed: crate::pipeline::columns::DEFAULT_SEED,
        }
    }
}

impl ForestConfig {
    pub fn with_trees(mut self, n_trees: usize) -> Self {
        self.n_trees = n_trees;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A fitted ensemble of decision trees.
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_features: usize,
    n_classes: usize,
}

impl RandomForest {
    /// Train the ensemble on row-major features and class labels.
    ///
    /// Each tree fits a bootstrap sample with sqrt-feature subsampling;
    /// per-tree seeds are drawn from a master RNG so the whole fit is
    /// deterministic for a given config.
    pub fn fit(
        config: &ForestConfig,
        rows: &[Vec<f64>],
        labels: &[usize],
    ) -> Result<Self, PipelineError> {
        if config.n_trees == 0 {
            return Err(PipelineError::Runtime(
                "forest needs at least one tree".to_string(),
            ));
        }
        if rows.is_empty() {
            return Err(PipelineError::Runtime(
                "training dataset has zero samples".to_string(),
            ));
        }
        if rows.len() != labels.len() {
            return Err(PipelineError::Runtime(format!(
                "feature rows ({}) and labels ({}) differ in length",
                rows.len(),
                labels.len()
            )));
        }

        let n_samples = rows.len();
        let n_features = rows[0].len();
        if n_features == 0 {
            return Err(PipelineError::Runtime(
                "training dataset has zero feature columns".to_string(),
            ));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_features {
                return Err(PipelineError::Runtime(format!(
                    "row {} has {} features, expected {}",
                    i,
                    row.len(),
                    n_features
                )));
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(PipelineError::Runtime(format!(
                    "non-finite feature value at row {}, column {}",
                    i, j
                )));
            }
        }

        // Always model both classes so a one-class training set still
        // reports metrics for the absent class.
        let n_classes = labels.iter().max().map_or(2, |&m| (m + 1).max(2));

        let tree_config = TreeConfig {
            max_depth: config.max_depth,
            min_samples_split: config.min_samples_split,
            min_samples_leaf: config.min_samples_leaf,
            max_features: (n_features as f64).sqrt().ceil() as usize,
        };

        let mut master_rng = ChaCha8Rng::seed_from_u64(config.seed);
        let tree_seeds: Vec<u64> = (0..config.n_trees).map(|_| master_rng.gen()).collect();

        let trees: Vec<DecisionTree> = tree_seeds
            .into_par_iter()
            .map(|seed| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let bootstrap: Vec<usize> =
                    (0..n_samples).map(|_| rng.gen_range(0..n_samples)).collect();
                DecisionTree::fit(rows, labels, &bootstrap, n_classes, &tree_config, &mut rng)
            })
            .collect();

        Ok(Self {
            trees,
            n_features,
            n_classes,
        })
    }

    /// Majority-vote prediction for one row; ties break to the lower class.
    pub fn predict(&self, row: &[f64]) -> Result<usize, PipelineError> {
        if row.len() != self.n_features {
            return Err(PipelineError::Runtime(format!(
                "prediction row has {} features, model expects {}",
                row.len(),
                self.n_features
            )));
        }
        let mut votes = vec![0usize; self.n_classes];
        for tree in &self.trees {
            votes[tree.predict_row(row)] += 1;
        }
        Ok(votes
            .iter()
            .enumerate()
            .max_by_key(|&(_, &v)| v)
            .map(|(c, _)| c)
            .unwrap_or(0))
    }

    /// Predictions for every row.
    pub fn predict_batch(&self, rows: &[Vec<f64>]) -> Result<Vec<usize>, PipelineError> {
        rows.iter().map(|row| self.predict(row)).collect()
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two well-separated clusters on the first feature.
    fn separable_data() -> (Vec<Vec<f64>>, Vec<usize>) {
        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for i in 0..30 {
            rows.push(vec![i as f64 * 0.1, 1.0]);
            labels.push(0);
        }
        for i in 0..30 {
            rows.push(vec![10.0 + i as f64 * 0.1, 1.0]);
            labels.push(1);
        }
        (rows, labels)
    }

    #[test]
    fn separable_accuracy_is_high() {
        let (rows, labels) = separable_data();
        let config = ForestConfig::default().with_trees(30);
        let forest = RandomForest::fit(&config, &rows, &labels).unwrap();

        let predictions = forest.predict_batch(&rows).unwrap();
        let correct = predictions
            .iter()
            .zip(&labels)
            .filter(|&(p, l)| p == l)
            .count();
        assert!(correct as f64 / labels.len() as f64 > 0.95);
    }

    #[test]
    fn deterministic_for_same_seed() {
        let (rows, labels) = separable_data();
        let config = ForestConfig::default().with_trees(10).with_seed(99);
        let a = RandomForest::fit(&config, &rows, &labels).unwrap();
        let b = RandomForest::fit(&config, &rows, &labels).unwrap();
        assert_eq!(
            a.predict_batch(&rows).unwrap(),
            b.predict_batch(&rows).unwrap()
        );
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let config = ForestConfig::default();
        assert!(RandomForest::fit(&config, &[], &[]).is_err());
    }

    #[test]
    fn zero_trees_is_an_error() {
        let (rows, labels) = separable_data();
        let config = ForestConfig::default().with_trees(0);
        assert!(RandomForest::fit(&config, &rows, &labels).is_err());
    }

    #[test]
    fn feature_count_mismatch_on_predict() {
        let (rows, labels) = separable_data();
        let config = ForestConfig::default().with_trees(5);
        let forest = RandomForest::fit(&config, &rows, &labels).unwrap();
        assert!(forest.predict(&[1.0]).is_err());
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let rows = vec![vec![1.0], vec![f64::NAN]];
        let labels = vec![0, 1];
        let config = ForestConfig::default().with_trees(5);
        assert!(RandomForest::fit(&config, &rows, &labels).is_err());
    }
}
