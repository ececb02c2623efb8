//! TF-IDF document vectorizer.
//!
//! Same fit/transform contract as [`CountVectorizer`], different cell
//! values: each count is normalized by document length and weighted by a
//! smoothed inverse document frequency,
//!
//! ```text
//! idf(t) = ln((1 + n_documents) / (1 + df(t))) + 1
//! ```
//!
//! so terms that appear everywhere contribute little and rare terms are
//! emphasized.

use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::{PolarityError, Result};
use crate::matrix::SparseMatrix;
use crate::vectorize::count::CountVectorizer;
use crate::vectorize::{VectorizerConfig, Vocabulary};

/// A vectorizer producing TF-IDF weighted term-document matrices.
pub struct TfidfVectorizer {
    analyzer: Arc<dyn Analyzer>,
    config: VectorizerConfig,
    vocabulary: Option<Vocabulary>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Create a TF-IDF vectorizer with the standard analyzer and default
    /// thresholds.
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(StandardAnalyzer::new()))
    }

    /// Create a TF-IDF vectorizer with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        TfidfVectorizer {
            analyzer,
            config: VectorizerConfig::default(),
            vocabulary: None,
            idf: Vec::new(),
        }
    }

    /// Set the document-frequency thresholds.
    pub fn with_config(mut self, config: VectorizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Learn the vocabulary and IDF weights from training documents.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        let vocabulary = Vocabulary::fit(&self.analyzer, documents, &self.config)?;

        let n = vocabulary.n_documents() as f64;
        let idf = (0..vocabulary.len())
            .map(|col| {
                let df = vocabulary.document_frequency(col) as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        self.vocabulary = Some(vocabulary);
        self.idf = idf;
        Ok(())
    }

    /// Transform documents into a TF-IDF weighted term-document matrix.
    ///
    /// Term frequencies are normalized by the document's total token count
    /// (out-of-vocabulary tokens still count toward the length), then
    /// multiplied by the fitted IDF. Tokens outside the vocabulary are
    /// dropped.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<SparseMatrix> {
        let vocabulary = self.fitted_vocabulary()?;
        let mut rows = Vec::with_capacity(documents.len());

        for doc in documents {
            let mut counts: HashMap<usize, f64> = HashMap::new();
            let mut doc_length = 0.0;
            for token in self.analyzer.analyze(doc.as_ref())? {
                doc_length += 1.0;
                if let Some(col) = vocabulary.get(&token.text) {
                    *counts.entry(col).or_insert(0.0) += 1.0;
                }
            }

            let row = counts
                .into_iter()
                .map(|(col, count)| (col, (count / doc_length) * self.idf[col]))
                .collect();
            rows.push(row);
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

    /// The fitted IDF weights, in column order.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    fn fitted_vocabulary(&self) -> Result<&Vocabulary> {
        self.vocabulary
            .as_ref()
            .ok_or_else(|| PolarityError::invalid_operation("vectorizer has not been fitted"))
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TfidfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfidfVectorizer")
            .field("analyzer", &self.analyzer.name())
            .field("config", &self.config)
            .field("vocabulary_size", &self.vocabulary_size())
            .finish()
    }
}

/// Either vectorizer behind one fit/transform surface, so the pipeline can
/// switch weighting without branching at every call site.
pub enum AnyVectorizer {
    /// Raw occurrence counts.
    Counts(CountVectorizer),
    /// TF-IDF weighting.
    Tfidf(TfidfVectorizer),
}

impl AnyVectorizer {
    /// Learn the vocabulary from training documents.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        match self {
            AnyVectorizer::Counts(v) => v.fit(documents),
            AnyVectorizer::Tfidf(v) => v.fit(documents),
        }
    }

    /// Transform documents against the fitted vocabulary.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<SparseMatrix> {
        match self {
            AnyVectorizer::Counts(v) => v.transform(documents),
            AnyVectorizer::Tfidf(v) => v.transform(documents),
        }
    }

    /// Size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        match self {
            AnyVectorizer::Counts(v) => v.vocabulary_size(),
            AnyVectorizer::Tfidf(v) => v.vocabulary_size(),
        }
    }
}
