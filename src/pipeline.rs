//! The end-to-end sentiment classification workflow.
//!
//! A [`SentimentPipeline`] runs the fixed stage sequence over a labeled
//! corpus:
//!
//! ```text
//! Corpus → split → fit vectorizer (train only) → transform both splits
//!        → [optional truncated SVD] → fit classifier → predict → report
//! ```
//!
//! Execution is strictly sequential and single-threaded. The vocabulary is
//! fit only on training text and reused unmodified on the test split, and
//! document/label alignment is preserved through every stage.
//!
//! # Examples
//!
//! ```
//! use polarity::corpus::{Corpus, Sentiment};
//! use polarity::pipeline::{PipelineConfig, SentimentPipeline};
//!
//! let corpus = Corpus::from_pairs(vec![
//!     ("a wonderful delightful film", Sentiment::Positive),
//!     ("wonderful acting and a delightful story", Sentiment::Positive),
//!     ("truly wonderful from start to finish", Sentiment::Positive),
//!     ("a dreadful boring mess", Sentiment::Negative),
//!     ("boring dreadful and painfully slow", Sentiment::Negative),
//!     ("a dreadful waste of time", Sentiment::Negative),
//! ]);
//!
//! let config = PipelineConfig {
//!     seed: Some(7),
//!     ..PipelineConfig::default()
//! };
//! let report = SentimentPipeline::new(config).run(&corpus).unwrap();
//! assert!(report.accuracy >= 0.0 && report.accuracy <= 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::classification::{Classifier, LogisticRegression, LogisticRegressionConfig};
use crate::corpus::{Corpus, Sentiment};
use crate::decomposition::{TruncatedSvd, TruncatedSvdConfig};
use crate::error::Result;
use crate::evaluate::EvaluationReport;
use crate::matrix::FeatureMatrix;
use crate::model_selection::train_test_split;
use crate::vectorize::tfidf::AnyVectorizer;
use crate::vectorize::{CountVectorizer, TfidfVectorizer, VectorizerConfig};

/// How term-document cells are weighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Raw token occurrence counts.
    #[default]
    Counts,
    /// Length-normalized TF × smoothed IDF.
    Tfidf,
}

/// Configuration for the full pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Fraction of documents assigned to the training split.
    pub train_fraction: f64,
    /// Cell weighting for the term-document matrix.
    pub weighting: Weighting,
    /// Document-frequency thresholds for the vocabulary.
    pub vectorizer: VectorizerConfig,
    /// When set, reduce the term-document matrix to this many dimensions
    /// via truncated SVD before classification.
    pub reduction: Option<usize>,
    /// Power-iteration settings for the reducer.
    pub svd: TruncatedSvdConfig,
    /// Classifier training settings.
    pub classifier: LogisticRegressionConfig,
    /// Seed for the split and the SVD initialization; `None` for a fresh
    /// random run.
    pub seed: Option<u64>,
    /// Maximum number of qualitative examples kept in the report.
    pub example_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            train_fraction: 0.7,
            weighting: Weighting::default(),
            vectorizer: VectorizerConfig::default(),
            reduction: None,
            svd: TruncatedSvdConfig::default(),
            classifier: LogisticRegressionConfig::default(),
            seed: None,
            example_limit: 10,
        }
    }
}

/// The sequential sentiment classification workflow.
#[derive(Debug, Clone)]
pub struct SentimentPipeline {
    config: PipelineConfig,
}

impl SentimentPipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        SentimentPipeline { config }
    }

    /// The pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full workflow over a labeled corpus.
    pub fn run(&self, corpus: &Corpus) -> Result<EvaluationReport> {
        let split = train_test_split(corpus, self.config.train_fraction, self.config.seed)?;

        let mut vectorizer = self.build_vectorizer();
        vectorizer.fit(&split.train.texts())?;
        let train_matrix = vectorizer.transform(&split.train.texts())?;
        let test_matrix = vectorizer.transform(&split.test.texts())?;

        let train_labels = split.train.labels();
        let predicted = match self.config.reduction {
            Some(k) => {
                let svd_config = TruncatedSvdConfig {
                    seed: self.config.seed,
                    ..self.config.svd.clone()
                };
                let svd = TruncatedSvd::fit(&train_matrix, k, &svd_config)?;
                let train_reduced = svd.transform(&train_matrix)?;
                let test_reduced = svd.transform(&test_matrix)?;
                self.train_and_predict(&train_reduced, &train_labels, &test_reduced)?
            }
            None => self.train_and_predict(&train_matrix, &train_labels, &test_matrix)?,
        };

        EvaluationReport::new(
            &split.test,
            &predicted,
            vectorizer.vocabulary_size(),
            self.config.example_limit,
        )
    }

    fn build_vectorizer(&self) -> AnyVectorizer {
        match self.config.weighting {
            Weighting::Counts => AnyVectorizer::Counts(
                CountVectorizer::new().with_config(self.config.vectorizer.clone()),
            ),
            Weighting::Tfidf => AnyVectorizer::Tfidf(
                TfidfVectorizer::new().with_config(self.config.vectorizer.clone()),
            ),
        }
    }

    fn train_and_predict(
        &self,
        train: &dyn FeatureMatrix,
        train_labels: &[Sentiment],
        test: &dyn FeatureMatrix,
    ) -> Result<Vec<Sentiment>> {
        let mut model = LogisticRegression::with_config(self.config.classifier.clone());
        model.fit(train, train_labels)?;
        model.predict(test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_corpus() -> Corpus {
        let positive = [
            "a wonderful delightful film",
            "wonderful acting and a delightful story",
            "truly wonderful from start to finish",
            "delightful and moving in every scene",
            "a wonderful experience all around",
        ];
        let negative = [
            "a dreadful boring mess",
            "boring dreadful and painfully slow",
            "a dreadful waste of time",
            "boring lifeless and dreadful throughout",
            "dreadful pacing and a boring script",
        ];

        let mut pairs: Vec<(&str, Sentiment)> = Vec::new();
        for text in positive {
            pairs.push((text, Sentiment::Positive));
        }
        for text in negative {
            pairs.push((text, Sentiment::Negative));
        }
        Corpus::from_pairs(pairs)
    }

    #[test]
    fn test_pipeline_runs_with_counts() {
        let config = PipelineConfig {
            seed: Some(3),
            ..PipelineConfig::default()
        };
        let report = SentimentPipeline::new(config).run(&toy_corpus()).unwrap();

        assert_eq!(report.n_test, 3);
        assert!((0.0..=1.0).contains(&report.accuracy));
        assert!(report.vocabulary_size > 0);
        assert!(!report.examples.is_empty());
    }

    #[test]
    fn test_pipeline_runs_with_tfidf() {
        let config = PipelineConfig {
            weighting: Weighting::Tfidf,
            seed: Some(3),
            ..PipelineConfig::default()
        };
        let report = SentimentPipeline::new(config).run(&toy_corpus()).unwrap();
        assert!((0.0..=1.0).contains(&report.accuracy));
    }

    #[test]
    fn test_pipeline_runs_with_reduction() {
        // k far above the usable rank still yields a well-formed run.
        let config = PipelineConfig {
            reduction: Some(4),
            seed: Some(3),
            ..PipelineConfig::default()
        };
        let report = SentimentPipeline::new(config).run(&toy_corpus()).unwrap();
        assert_eq!(report.n_test, 3);
    }

    #[test]
    fn test_pipeline_seeded_is_reproducible() {
        let config = PipelineConfig {
            seed: Some(11),
            ..PipelineConfig::default()
        };
        let a = SentimentPipeline::new(config.clone()).run(&toy_corpus()).unwrap();
        let b = SentimentPipeline::new(config).run(&toy_corpus()).unwrap();

        assert_eq!(a.accuracy, b.accuracy);
        assert_eq!(a.examples, b.examples);
    }

    #[test]
    fn test_pipeline_config_deserializes() {
        let config: PipelineConfig = serde_json::from_str(
            r#"{
                "train_fraction": 0.8,
                "weighting": "tfidf",
                "vectorizer": {"min_df": 1, "max_df": 1.0},
                "reduction": null,
                "svd": {"n_iter": 100, "tolerance": 1e-9, "seed": null},
                "classifier": {
                    "max_iter": 2000,
                    "learning_rate": 0.1,
                    "tolerance": 1e-8,
                    "fit_intercept": true
                },
                "seed": 5,
                "example_limit": 10
            }"#,
        )
        .unwrap();

        assert_eq!(config.weighting, Weighting::Tfidf);
        assert_eq!(config.seed, Some(5));
    }
}
