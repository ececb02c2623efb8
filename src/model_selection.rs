//! Train/test splitting for labeled corpora.
//!
//! The split is a uniform random partition of document indices without
//! replacement: the first `ceil(n * train_fraction)` indices of a shuffled
//! permutation form the training set, the remainder the test set. There is
//! no stratification by label, so small corpora can come out imbalanced —
//! an accepted simplification of this pipeline.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::corpus::Corpus;
use crate::error::{PolarityError, Result};

/// A train/test partition of a corpus.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    /// The training subset.
    pub train: Corpus,
    /// The held-out test subset.
    pub test: Corpus,
    /// Original indices of the training documents.
    pub train_indices: Vec<usize>,
    /// Original indices of the test documents.
    pub test_indices: Vec<usize>,
}

/// Split a corpus into train and test subsets.
///
/// `train_fraction` must lie strictly between 0 and 1, and the corpus must
/// be large enough that both subsets are non-empty. When `seed` is supplied
/// the shuffle uses a seeded [`StdRng`] and the split is reproducible;
/// otherwise the thread RNG is used.
///
/// The two index sets are disjoint and together cover every corpus index
/// exactly once; document/label pairing is preserved in both subsets.
pub fn train_test_split(
    corpus: &Corpus,
    train_fraction: f64,
    seed: Option<u64>,
) -> Result<TrainTestSplit> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(PolarityError::invalid_argument(format!(
            "train_fraction must be in (0, 1), got {train_fraction}"
        )));
    }
    if corpus.is_empty() {
        return Err(PolarityError::invalid_argument(
            "cannot split an empty corpus",
        ));
    }

    let n = corpus.len();
    let n_train = ((n as f64) * train_fraction).ceil() as usize;
    if n_train == 0 || n_train == n {
        return Err(PolarityError::invalid_argument(format!(
            "train_fraction {train_fraction} leaves an empty subset for {n} documents"
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    match seed {
        Some(seed) => shuffle_indices(&mut indices, &mut StdRng::seed_from_u64(seed)),
        None => shuffle_indices(&mut indices, &mut rand::rng()),
    }

    let train_indices = indices[..n_train].to_vec();
    let test_indices = indices[n_train..].to_vec();

    let train = corpus.select(&train_indices)?;
    let test = corpus.select(&test_indices)?;

    Ok(TrainTestSplit {
        train,
        test,
        train_indices,
        test_indices,
    })
}

fn shuffle_indices<R: Rng>(indices: &mut [usize], rng: &mut R) {
    indices.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::corpus::Sentiment;

    fn corpus_of(n: usize) -> Corpus {
        (0..n)
            .map(|i| {
                let label = if i % 2 == 0 {
                    Sentiment::Positive
                } else {
                    Sentiment::Negative
                };
                crate::corpus::LabeledDocument::new(format!("document {i}"), label)
            })
            .collect()
    }

    #[test]
    fn test_split_sizes() {
        let corpus = corpus_of(10);
        let split = train_test_split(&corpus, 0.7, Some(42)).unwrap();

        assert_eq!(split.train.len(), 7);
        assert_eq!(split.test.len(), 3);
    }

    #[test]
    fn test_split_is_disjoint_and_covering() {
        let corpus = corpus_of(23);
        let split = train_test_split(&corpus, 0.7, Some(7)).unwrap();

        let train: HashSet<usize> = split.train_indices.iter().copied().collect();
        let test: HashSet<usize> = split.test_indices.iter().copied().collect();

        assert_eq!(train.len(), split.train_indices.len());
        assert_eq!(test.len(), split.test_indices.len());
        assert!(train.is_disjoint(&test));

        let all: HashSet<usize> = train.union(&test).copied().collect();
        assert_eq!(all, (0..23).collect::<HashSet<usize>>());
    }

    #[test]
    fn test_split_preserves_label_alignment() {
        let corpus = corpus_of(12);
        let split = train_test_split(&corpus, 0.5, Some(1)).unwrap();

        for (doc, &original) in split.train.documents().iter().zip(&split.train_indices) {
            assert_eq!(doc, corpus.get(original).unwrap());
        }
        for (doc, &original) in split.test.documents().iter().zip(&split.test_indices) {
            assert_eq!(doc, corpus.get(original).unwrap());
        }
    }

    #[test]
    fn test_split_seeded_is_reproducible() {
        let corpus = corpus_of(30);
        let a = train_test_split(&corpus, 0.7, Some(99)).unwrap();
        let b = train_test_split(&corpus, 0.7, Some(99)).unwrap();

        assert_eq!(a.train_indices, b.train_indices);
        assert_eq!(a.test_indices, b.test_indices);
    }

    #[test]
    fn test_split_rejects_bad_fraction() {
        let corpus = corpus_of(10);
        assert!(train_test_split(&corpus, 0.0, None).is_err());
        assert!(train_test_split(&corpus, 1.0, None).is_err());
        assert!(train_test_split(&corpus, -0.3, None).is_err());
    }

    #[test]
    fn test_split_rejects_degenerate_corpus() {
        let corpus = corpus_of(1);
        assert!(train_test_split(&corpus, 0.7, None).is_err());

        let empty = Corpus::new();
        assert!(train_test_split(&empty, 0.7, None).is_err());
    }
}
