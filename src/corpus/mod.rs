//! Labeled corpus types for sentiment classification.
//!
//! A [`Corpus`] is an ordered list of [`LabeledDocument`]s: raw sentence text
//! paired with a binary [`Sentiment`] label. Document order is significant —
//! every downstream transformation (vectorization, reduction, prediction)
//! keeps row i of its output aligned with document i of its input.

use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};

pub mod loader;

pub use loader::load_tsv;

/// A binary sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Negative sentiment (label 0).
    Negative,
    /// Positive sentiment (label 1).
    Positive,
}

impl Sentiment {
    /// Convert an integer label (0 or 1) into a sentiment.
    pub fn from_label(label: u8) -> Result<Self> {
        match label {
            0 => Ok(Sentiment::Negative),
            1 => Ok(Sentiment::Positive),
            other => Err(PolarityError::corpus(format!(
                "label must be 0 or 1, got {other}"
            ))),
        }
    }

    /// The integer form of this label.
    pub fn as_label(&self) -> u8 {
        match self {
            Sentiment::Negative => 0,
            Sentiment::Positive => 1,
        }
    }

    /// The label as a regression target (0.0 or 1.0).
    pub fn as_target(&self) -> f64 {
        self.as_label() as f64
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Positive => write!(f, "positive"),
        }
    }
}

/// A single document with its sentiment label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledDocument {
    /// Raw sentence text.
    pub text: String,
    /// Binary sentiment label.
    pub label: Sentiment,
}

impl LabeledDocument {
    /// Create a new labeled document.
    pub fn new<S: Into<String>>(text: S, label: Sentiment) -> Self {
        LabeledDocument {
            text: text.into(),
            label,
        }
    }
}

/// An ordered collection of labeled documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    documents: Vec<LabeledDocument>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Corpus {
            documents: Vec::new(),
        }
    }

    /// Build a corpus from parallel text/label pairs.
    pub fn from_pairs<S: Into<String>>(pairs: Vec<(S, Sentiment)>) -> Self {
        let documents = pairs
            .into_iter()
            .map(|(text, label)| LabeledDocument::new(text, label))
            .collect();
        Corpus { documents }
    }

    /// Append a document to the corpus.
    pub fn push(&mut self, document: LabeledDocument) {
        self.documents.push(document);
    }

    /// Number of documents in the corpus.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The documents in order.
    pub fn documents(&self) -> &[LabeledDocument] {
        &self.documents
    }

    /// The document texts, in corpus order.
    pub fn texts(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.text.as_str()).collect()
    }

    /// The labels, in corpus order.
    pub fn labels(&self) -> Vec<Sentiment> {
        self.documents.iter().map(|d| d.label).collect()
    }

    /// Get the document at the given index.
    pub fn get(&self, index: usize) -> Option<&LabeledDocument> {
        self.documents.get(index)
    }

    /// Build a new corpus from the documents at the given indices.
    ///
    /// Indices out of range are an error; duplicates are permitted (the
    /// splitter never produces them, but sampling with replacement is a
    /// legitimate caller).
    pub fn select(&self, indices: &[usize]) -> Result<Corpus> {
        let mut documents = Vec::with_capacity(indices.len());
        for &i in indices {
            let doc = self.documents.get(i).ok_or_else(|| {
                PolarityError::invalid_argument(format!(
                    "index {i} out of range for corpus of {} documents",
                    self.documents.len()
                ))
            })?;
            documents.push(doc.clone());
        }
        Ok(Corpus { documents })
    }
}

impl FromIterator<LabeledDocument> for Corpus {
    fn from_iter<T: IntoIterator<Item = LabeledDocument>>(iter: T) -> Self {
        Corpus {
            documents: iter.into_iter().collect(),
        }
    }
}
