//! Classification models mapping feature vectors to sentiment labels.

use serde::{Deserialize, Serialize};

use crate::corpus::Sentiment;
use crate::error::Result;
use crate::matrix::FeatureMatrix;

pub mod logistic;

pub use logistic::{LogisticRegression, LogisticRegressionConfig};

/// Trait for binary sentiment classifiers.
pub trait Classifier: Send + Sync {
    /// Fit the model on a feature matrix with one label per row.
    fn fit(&mut self, features: &dyn FeatureMatrix, labels: &[Sentiment]) -> Result<()>;

    /// Predict a label for each row of the feature matrix.
    fn predict(&self, features: &dyn FeatureMatrix) -> Result<Vec<Sentiment>>;

    /// Check if the model has been trained.
    fn is_trained(&self) -> bool;

    /// Get the name of this classifier (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Statistics recorded while training a classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Number of optimizer iterations completed.
    pub iterations: usize,
    /// Loss at the final iteration.
    pub final_loss: f64,
    /// Whether the optimizer converged within the iteration cap.
    ///
    /// Non-convergence is not an error: the best available weights are
    /// kept and this flag records the outcome.
    pub converged: bool,
}
