//! Deterministic holdout partitioning

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Partition `0..n_samples` into (train, holdout) index sets.
///
/// The shuffle is driven by a seeded RNG, so the same seed always yields
/// the same partition. At least one sample stays on the training side
/// whenever `n_samples > 0`.
pub fn holdout_split(n_samples: usize, holdout_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let mut n_holdout = ((n_samples as f64) * holdout_fraction).round() as usize;
    if n_holdout >= n_samples && n_samples > 0 {
        n_holdout = n_samples - 1;
    }

    let holdout: Vec<usize> = indices[..n_holdout].to_vec();
    let train: Vec<usize> = indices[n_holdout..].to_vec();
    (train, holdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_is_disjoint_and_complete() {
        let (train, holdout) = holdout_split(100, 0.3, 42);
        assert_eq!(train.len(), 70);
        assert_eq!(holdout.len(), 30);

        let mut all: Vec<usize> = train.iter().chain(holdout.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn deterministic_for_same_seed() {
        let a = holdout_split(50, 0.3, 7);
        let b = holdout_split(50, 0.3, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_changes_partition() {
        let a = holdout_split(50, 0.3, 7);
        let b = holdout_split(50, 0.3, 8);
        assert_ne!(a.1, b.1);
    }

    #[test]
    fn train_side_never_empty() {
        let (train, holdout) = holdout_split(2, 0.9, 42);
        assert_eq!(train.len(), 1);
        assert_eq!(holdout.len(), 1);
    }

    #[test]
    fn zero_samples() {
        let (train, holdout) = holdout_split(0, 0.3, 42);
        assert!(train.is_empty());
        assert!(holdout.is_empty());
    }
}
