//! Single gini-split decision tree used as the forest member

use rand_chacha::ChaCha8Rng;

/// Stopping and sampling parameters for one tree.
#[derive(Debug, Clone)]
pub(crate) struct TreeConfig {
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    /// Number of features sampled at each split.
    pub max_features: usize,
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        class: usize,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// A fitted decision tree over row-major `f64` features.
#[derive(Debug, Clone)]
pub(crate) struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Fit a tree on the samples selected by `indices`.
    pub fn fit(
        rows: &[Vec<f64>],
        labels: &[usize],
        indices: &[usize],
        n_classes: usize,
        config: &TreeConfig,
        rng: &mut ChaCha8Rng,
    ) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        let mut work = indices.to_vec();
        tree.build(rows, labels, &mut work, n_classes, 0, config, rng);
        tree
    }

    /// Predicted class for a single feature row.
    pub fn predict_row(&self, row: &[f64]) -> usize {
        let mut node = 0;
        loop {
            match &self.nodes[node] {
                Node::Leaf { class } => return *class,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Recursively grow the subtree for `indices`, returning its node id.
    fn build(
        &mut self,
        rows: &[Vec<f64>],
        labels: &[usize],
        indices: &mut [usize],
        n_classes: usize,
        depth: usize,
        config: &TreeConfig,
        rng: &mut ChaCha8Rng,
    ) -> usize {
        let counts = class_counts(labels, indices, n_classes);
        let majority = argmax(&counts);

        let pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
        let too_small = indices.len() < config.min_samples_split;
        let too_deep = config.max_depth.is_some_and(|d| depth >= d);

        if pure || too_small || too_deep {
            return self.push(Node::Leaf { class: majority });
        }

        let parent_gini = gini(&counts, indices.len());
        let best = best_split(rows, labels, indices, n_classes, config, rng);

        let Some(split) = best else {
            return self.push(Node::Leaf { class: majority });
        };
        if parent_gini - split.impurity <= 1e-12 {
            return self.push(Node::Leaf { class: majority });
        }

        // Partition indices in place around the chosen threshold.
        let mid = partition(rows, indices, split.feature, split.threshold);
        let (left_indices, right_indices) = indices.split_at_mut(mid);

        let node = self.push(Node::Leaf { class: majority });
        let left = self.build(rows, labels, left_indices, n_classes, depth + 1, config, rng);
        let right = self.build(rows, labels, right_indices, n_classes, depth + 1, config, rng);
        self.nodes[node] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        node
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    /// Weighted gini of the two children.
    impurity: f64,
}

/// Exhaustive best split over a random feature subset.
fn best_split(
    rows: &[Vec<f64>],
    labels: &[usize],
    indices: &[usize],
    n_classes: usize,
    config: &TreeConfig,
    rng: &mut ChaCha8Rng,
) -> Option<SplitCandidate> {
    let n_features = rows[indices[0]].len();
    let n_sampled = config.max_features.min(n_features).max(1);
    let features = rand::seq::index::sample(rng, n_features, n_sampled);

    let n = indices.len();
    let mut best: Option<SplitCandidate> = None;

    for feature in features {
        // Sort samples by this feature, then scan boundaries with running
        // class counts.
        let mut order: Vec<usize> = indices.to_vec();
        order.sort_by(|&a, &b| {
            rows[a][feature]
                .partial_cmp(&rows[b][feature])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut left_counts = vec![0usize; n_classes];
        let right_all = class_counts(labels, &order, n_classes);
        let mut right_counts = right_all;

        for i in 1..n {
            let prev = order[i - 1];
            left_counts[labels[prev]] += 1;
            right_counts[labels[prev]] -= 1;

            let value_prev = rows[prev][feature];
            let value_next = rows[order[i]][feature];
            if value_next <= value_prev {
                continue;
            }
            if i < config.min_samples_leaf || n - i < config.min_samples_leaf {
                continue;
            }

            let impurity = (i as f64 * gini(&left_counts, i)
                + (n - i) as f64 * gini(&right_counts, n - i))
                / n as f64;

            if best.as_ref().map_or(true, |b| impurity < b.impurity) {
                best = Some(SplitCandidate {
                    feature,
                    threshold: (value_prev + value_next) / 2.0,
                    impurity,
                });
            }
        }
    }

    best
}

/// Move indices with `row[feature] <= threshold` to the front; returns the
/// boundary position.
fn partition(rows: &[Vec<f64>], indices: &mut [usize], feature: usize, threshold: f64) -> usize {
    let mut mid = 0;
    for i in 0..indices.len() {
        if rows[indices[i]][feature] <= threshold {
            indices.swap(i, mid);
            mid += 1;
        }
    }
    mid
}

fn class_counts(labels: &[usize], indices: &[usize], n_classes: usize) -> Vec<usize> {
    let mut counts = vec![0usize; n_classes];
    for &i in indices {
        counts[labels[i]] += 1;
    }
    counts
}

fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let sum_sq: f64 = counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total as f64;
            p * p
        })
        .sum();
    1.0 - sum_sq
}

fn argmax(counts: &[usize]) -> usize {
    counts
        .iter()
        .enumerate()
        .max_by_key(|&(_, &c)| c)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn config(max_features: usize) -> TreeConfig {
        TreeConfig {
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features,
        }
    }

    #[test]
    fn separable_data_is_learned_exactly() {
        let rows: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64]).collect();
        let labels: Vec<usize> = (0..20).map(|i| usize::from(i >= 10)).collect();
        let indices: Vec<usize> = (0..20).collect();

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let tree = DecisionTree::fit(&rows, &labels, &indices, 2, &config(1), &mut rng);

        for (row, &label) in rows.iter().zip(&labels) {
            assert_eq!(tree.predict_row(row), label);
        }
    }

    #[test]
    fn pure_node_becomes_leaf() {
        let rows = vec![vec![1.0], vec![2.0], vec![3.0]];
        let labels = vec![1, 1, 1];
        let indices = vec![0, 1, 2];

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let tree = DecisionTree::fit(&rows, &labels, &indices, 2, &config(1), &mut rng);
        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.predict_row(&[42.0]), 1);
    }

    #[test]
    fn max_depth_limits_growth() {
        let rows: Vec<Vec<f64>> = (0..8).map(|i| vec![i as f64]).collect();
        let labels = vec![0, 1, 0, 1, 0, 1, 0, 1];
        let indices: Vec<usize> = (0..8).collect();

        let cfg = TreeConfig {
            max_depth: Some(1),
            ..config(1)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let tree = DecisionTree::fit(&rows, &labels, &indices, 2, &cfg, &mut rng);
        // Depth 1 allows at most one split: three nodes.
        assert!(tree.nodes.len() <= 3);
    }
}
