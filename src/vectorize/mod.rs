//! Document vectorization: vocabularies and term-document matrices.
//!
//! A vectorizer learns a [`Vocabulary`] from training text (`fit`) and then
//! maps any document collection onto that vocabulary as a sparse
//! term-document matrix (`transform`). The vocabulary is immutable after
//! fitting: transforming never adds columns, and out-of-vocabulary tokens
//! are silently dropped. That asymmetry is what keeps test text from
//! leaking into the learned representation.
//!
//! Two weightings are provided:
//!
//! - [`CountVectorizer`] — raw token occurrence counts
//! - [`TfidfVectorizer`] — length-normalized term frequency × smoothed
//!   inverse document frequency

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::{PolarityError, Result};

pub mod count;
pub mod tfidf;

pub use count::CountVectorizer;
pub use tfidf::TfidfVectorizer;

/// Document-frequency thresholds shared by the vectorizers.
///
/// Terms with a document frequency below `min_df` (absolute count) or above
/// `max_df` (fraction of documents) are excluded from the vocabulary. The
/// defaults exclude nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Minimum document frequency, as an absolute document count.
    pub min_df: usize,
    /// Maximum document frequency, as a fraction of the corpus.
    pub max_df: f64,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig {
            min_df: 1,
            max_df: 1.0,
        }
    }
}

impl VectorizerConfig {
    fn validate(&self) -> Result<()> {
        if self.min_df == 0 {
            return Err(PolarityError::invalid_argument(
                "min_df must be at least 1",
            ));
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(PolarityError::invalid_argument(format!(
                "max_df must be in (0, 1], got {}",
                self.max_df
            )));
        }
        Ok(())
    }
}

/// A mapping from token string to column index, learned once from training
/// text and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    terms: Vec<String>,
    document_frequency: Vec<usize>,
    n_documents: usize,
}

impl Vocabulary {
    /// Learn a vocabulary from the given documents.
    ///
    /// Surviving terms are sorted lexicographically before numbering, so
    /// fitting twice on identical text yields an identical mapping.
    pub fn fit<S: AsRef<str>>(
        analyzer: &Arc<dyn Analyzer>,
        documents: &[S],
        config: &VectorizerConfig,
    ) -> Result<Self> {
        config.validate()?;
        if documents.is_empty() {
            return Err(PolarityError::invalid_argument(
                "cannot fit a vocabulary on an empty document list",
            ));
        }

        let n_documents = documents.len();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let mut seen: Vec<String> = analyzer
                .analyze(doc.as_ref())?
                .map(|token| token.text)
                .collect();
            seen.sort_unstable();
            seen.dedup();
            for token in seen {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let max_count = (config.max_df * n_documents as f64).floor() as usize;
        let mut terms: Vec<(String, usize)> = document_frequency
            .into_iter()
            .filter(|&(_, df)| df >= config.min_df && df <= max_count)
            .collect();
        terms.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let mut index = HashMap::with_capacity(terms.len());
        let mut term_list = Vec::with_capacity(terms.len());
        let mut dfs = Vec::with_capacity(terms.len());
        for (i, (term, df)) in terms.into_iter().enumerate() {
            index.insert(term.clone(), i);
            term_list.push(term);
            dfs.push(df);
        }

        Ok(Vocabulary {
            index,
            terms: term_list,
            document_frequency: dfs,
            n_documents,
        })
    }

    /// Column index for a term, if present.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Number of terms in the vocabulary.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in column order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Document frequency of the term at the given column.
    pub fn document_frequency(&self, column: usize) -> usize {
        self.document_frequency[column]
    }

    /// Number of documents the vocabulary was fit on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::StandardAnalyzer;

    fn analyzer() -> Arc<dyn Analyzer> {
        Arc::new(StandardAnalyzer::new())
    }

    #[test]
    fn test_vocabulary_fit_is_deterministic() {
        let docs = vec!["the cat sat", "the dog ran", "a cat and a dog"];
        let a = Vocabulary::fit(&analyzer(), &docs, &VectorizerConfig::default()).unwrap();
        let b = Vocabulary::fit(&analyzer(), &docs, &VectorizerConfig::default()).unwrap();

        assert_eq!(a.terms(), b.terms());
        for term in a.terms() {
            assert_eq!(a.get(term), b.get(term));
        }
    }

    #[test]
    fn test_vocabulary_sorted_numbering() {
        let docs = vec!["zebra apple mango"];
        let vocab = Vocabulary::fit(&analyzer(), &docs, &VectorizerConfig::default()).unwrap();

        assert_eq!(vocab.terms(), &["apple", "mango", "zebra"]);
        assert_eq!(vocab.get("apple"), Some(0));
        assert_eq!(vocab.get("zebra"), Some(2));
    }

    #[test]
    fn test_vocabulary_min_df() {
        let docs = vec!["apple banana", "apple cherry", "apple banana"];
        let config = VectorizerConfig {
            min_df: 2,
            max_df: 1.0,
        };
        let vocab = Vocabulary::fit(&analyzer(), &docs, &config).unwrap();

        assert_eq!(vocab.terms(), &["apple", "banana"]);
    }

    #[test]
    fn test_vocabulary_max_df() {
        let docs = vec!["apple banana", "apple cherry", "apple durian"];
        let config = VectorizerConfig {
            min_df: 1,
            max_df: 0.5,
        };
        let vocab = Vocabulary::fit(&analyzer(), &docs, &config).unwrap();

        // "apple" appears in every document and is excluded.
        assert_eq!(vocab.terms(), &["banana", "cherry", "durian"]);
    }

    #[test]
    fn test_vocabulary_document_frequency() {
        let docs = vec!["apple apple banana", "apple"];
        let vocab = Vocabulary::fit(&analyzer(), &docs, &VectorizerConfig::default()).unwrap();

        // df counts documents, not occurrences.
        let apple = vocab.get("apple").unwrap();
        let banana = vocab.get("banana").unwrap();
        assert_eq!(vocab.document_frequency(apple), 2);
        assert_eq!(vocab.document_frequency(banana), 1);
        assert_eq!(vocab.n_documents(), 2);
    }

    #[test]
    fn test_vocabulary_rejects_bad_config() {
        let docs = vec!["a"];
        let bad_min = VectorizerConfig {
            min_df: 0,
            max_df: 1.0,
        };
        assert!(Vocabulary::fit(&analyzer(), &docs, &bad_min).is_err());

        let bad_max = VectorizerConfig {
            min_df: 1,
            max_df: 1.5,
        };
        assert!(Vocabulary::fit(&analyzer(), &docs, &bad_max).is_err());
    }

    #[test]
    fn test_vocabulary_rejects_empty_corpus() {
        let docs: Vec<&str> = Vec::new();
        assert!(Vocabulary::fit(&analyzer(), &docs, &VectorizerConfig::default()).is_err());
    }
}
