//! Count-based document vectorizer.
//!
//! Produces the classic bag-of-words representation: cell `(i, j)` of the
//! term-document matrix is the number of times vocabulary term `j` occurs in
//! document `i`.
//!
//! # Examples
//!
//! ```
//! use polarity::vectorize::CountVectorizer;
//!
//! let train = vec!["the cat sat", "the dog sat"];
//! let mut vectorizer = CountVectorizer::new();
//! let matrix = vectorizer.fit_transform(&train).unwrap();
//!
//! assert_eq!(matrix.shape(), (2, 4)); // cat, dog, sat, the
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::{PolarityError, Result};
use crate::matrix::SparseMatrix;
use crate::vectorize::{VectorizerConfig, Vocabulary};

/// A vectorizer producing raw token occurrence counts.
pub struct CountVectorizer {
    analyzer: Arc<dyn Analyzer>,
    config: VectorizerConfig,
    vocabulary: Option<Vocabulary>,
}

impl CountVectorizer {
    /// Create a count vectorizer with the standard analyzer and default
    /// thresholds.
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(StandardAnalyzer::new()))
    }

    /// Create a count vectorizer with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        CountVectorizer {
            analyzer,
            config: VectorizerConfig::default(),
            vocabulary: None,
        }
    }

    /// Set the document-frequency thresholds.
    pub fn with_config(mut self, config: VectorizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Learn the vocabulary from training documents.
    ///
    /// Re-fitting on identical text yields an identical vocabulary mapping.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        self.vocabulary = Some(Vocabulary::fit(&self.analyzer, documents, &self.config)?);
        Ok(())
    }

    /// Transform documents into a term-document count matrix.
    ///
    /// The matrix has one row per document and one column per vocabulary
    /// term. Tokens outside the fitted vocabulary are dropped.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<SparseMatrix> {
        let vocabulary = self.fitted_vocabulary()?;
        let mut rows = Vec::with_capacity(documents.len());

        for doc in documents {
            let mut counts: HashMap<usize, f64> = HashMap::new();
            for token in self.analyzer.analyze(doc.as_ref())? {
                if let Some(col) = vocabulary.get(&token.text) {
                    *counts.entry(col).or_insert(0.0) += 1.0;
                }
            }
            rows.push(counts.into_iter().collect());
        }

        SparseMatrix::from_rows(rows, vocabulary.len())
    }

    /// Fit on the documents, then transform them.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<SparseMatrix> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// The fitted vocabulary.
    pub fn vocabulary(&self) -> Result<&Vocabulary> {
        self.fitted_vocabulary()
    }

    /// Size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.as_ref().map(|v| v.len()).unwrap_or(0)
    }

    /// The analyzer used for tokenization.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    fn fitted_vocabulary(&self) -> Result<&Vocabulary> {
        self.vocabulary
            .as_ref()
            .ok_or_else(|| PolarityError::invalid_operation("vectorizer has not been fitted"))
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CountVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountVectorizer")
            .field("analyzer", &self.analyzer.name())
            .field("config", &self.config)
            .field("vocabulary_size", &self.vocabulary_size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matrix_literal_counts() {
        // Three documents over a five-term vocabulary; every cell must be
        // the literal token count.
        let docs = vec![
            "apple banana apple",
            "cherry banana",
            "durian elder durian durian",
        ];
        let mut vectorizer = CountVectorizer::new();
        let matrix = vectorizer.fit_transform(&docs).unwrap();

        assert_eq!(matrix.shape(), (3, 5));

        let vocab = vectorizer.vocabulary().unwrap();
        let col = |t: &str| vocab.get(t).unwrap();

        assert_eq!(matrix.get(0, col("apple")), 2.0);
        assert_eq!(matrix.get(0, col("banana")), 1.0);
        assert_eq!(matrix.get(0, col("cherry")), 0.0);
        assert_eq!(matrix.get(1, col("cherry")), 1.0);
        assert_eq!(matrix.get(2, col("durian")), 3.0);
        assert_eq!(matrix.get(2, col("elder")), 1.0);
    }

    #[test]
    fn test_transform_drops_out_of_vocabulary_tokens() {
        let train = vec!["alpha beta", "beta gamma"];
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit(&train).unwrap();

        let test = vec!["beta delta epsilon"];
        let matrix = vectorizer.transform(&test).unwrap();

        // No new columns for delta/epsilon; the single in-vocabulary token
        // is the only stored entry.
        assert_eq!(matrix.shape(), (1, 3));
        assert_eq!(matrix.nnz(), 1);
        let beta = vectorizer.vocabulary().unwrap().get("beta").unwrap();
        assert_eq!(matrix.get(0, beta), 1.0);
    }

    #[test]
    fn test_transform_before_fit_is_invalid() {
        let vectorizer = CountVectorizer::new();
        let err = vectorizer.transform(&["anything"]).unwrap_err();
        assert!(matches!(err, PolarityError::InvalidOperation(_)));
    }

    #[test]
    fn test_fit_twice_identical_vocabulary() {
        let docs = vec!["one two three", "two three four"];
        let mut a = CountVectorizer::new();
        let mut b = CountVectorizer::new();
        a.fit(&docs).unwrap();
        b.fit(&docs).unwrap();

        assert_eq!(
            a.vocabulary().unwrap().terms(),
            b.vocabulary().unwrap().terms()
        );
    }

    #[test]
    fn test_lowercasing_merges_casings() {
        let docs = vec!["Apple APPLE apple"];
        let mut vectorizer = CountVectorizer::new();
        let matrix = vectorizer.fit_transform(&docs).unwrap();

        assert_eq!(matrix.shape(), (1, 1));
        assert_eq!(matrix.get(0, 0), 3.0);
    }

    #[test]
    fn test_document_with_no_known_tokens_is_a_zero_row() {
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit(&["known words"]).unwrap();

        let matrix = vectorizer.transform(&["entirely novel tokens"]).unwrap();
        assert_eq!(matrix.n_rows(), 1);
        assert_eq!(matrix.nnz(), 0);
    }
}
