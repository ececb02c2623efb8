//! Binary logistic regression trained by gradient descent.
//!
//! The model learns a weight per feature column (plus an optional
//! intercept) by full-batch gradient descent on the log loss. Optimization
//! runs for at most `max_iter` iterations; failing to converge within the
//! cap is accepted silently — the best available weights are kept and the
//! outcome is recorded in [`TrainingStats`].
//!
//! # Examples
//!
//! ```
//! use polarity::classification::{Classifier, LogisticRegression};
//! use polarity::corpus::Sentiment;
//! use polarity::matrix::DenseMatrix;
//!
//! let features = DenseMatrix::from_vec(vec![0.0, 1.0, 5.0, 6.0], 2, 2).unwrap();
//! let labels = vec![Sentiment::Negative, Sentiment::Positive];
//!
//! let mut model = LogisticRegression::new();
//! model.fit(&features, &labels).unwrap();
//! let predictions = model.predict(&features).unwrap();
//! assert_eq!(predictions, labels);
//! ```

use serde::{Deserialize, Serialize};

use crate::classification::{Classifier, TrainingStats};
use crate::corpus::Sentiment;
use crate::error::{PolarityError, Result};
use crate::matrix::FeatureMatrix;

/// Configuration for logistic regression training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegressionConfig {
    /// Iteration cap for the optimizer.
    pub max_iter: usize,
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Convergence threshold on the change in loss between iterations.
    pub tolerance: f64,
    /// Whether to fit an intercept term.
    pub fit_intercept: bool,
}

impl Default for LogisticRegressionConfig {
    fn default() -> Self {
        LogisticRegressionConfig {
            max_iter: 2000,
            learning_rate: 0.1,
            tolerance: 1e-8,
            fit_intercept: true,
        }
    }
}

/// A binary logistic classifier.
pub struct LogisticRegression {
    config: LogisticRegressionConfig,
    weights: Vec<f64>,
    intercept: f64,
    stats: Option<TrainingStats>,
}

impl LogisticRegression {
    /// Create an untrained model with default configuration.
    pub fn new() -> Self {
        Self::with_config(LogisticRegressionConfig::default())
    }

    /// Create an untrained model with the given configuration.
    pub fn with_config(config: LogisticRegressionConfig) -> Self {
        LogisticRegression {
            config,
            weights: Vec::new(),
            intercept: 0.0,
            stats: None,
        }
    }

    /// Probability of the positive class for each row.
    pub fn predict_proba(&self, features: &dyn FeatureMatrix) -> Result<Vec<f64>> {
        if !self.is_trained() {
            return Err(PolarityError::invalid_operation(
                "model has not been trained",
            ));
        }
        if features.n_cols() != self.weights.len() {
            return Err(PolarityError::invalid_argument(format!(
                "feature matrix has {} columns, but the model was trained on {}",
                features.n_cols(),
                self.weights.len()
            )));
        }

        let probs = (0..features.n_rows())
            .map(|i| sigmoid(features.row_dot(i, &self.weights) + self.intercept))
            .collect();
        Ok(probs)
    }

    /// Fitted weights, one per feature column.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Fitted intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Statistics from the last training run.
    pub fn training_stats(&self) -> Option<&TrainingStats> {
        self.stats.as_ref()
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for LogisticRegression {
    fn fit(&mut self, features: &dyn FeatureMatrix, labels: &[Sentiment]) -> Result<()> {
        let n = features.n_rows();
        if n == 0 {
            return Err(PolarityError::invalid_argument(
                "cannot train on an empty feature matrix",
            ));
        }
        if labels.len() != n {
            return Err(PolarityError::invalid_argument(format!(
                "{} labels for {} feature rows",
                labels.len(),
                n
            )));
        }

        let n_features = features.n_cols();
        let targets: Vec<f64> = labels.iter().map(|l| l.as_target()).collect();

        let mut weights = vec![0.0; n_features];
        let mut intercept = 0.0;
        let mut previous_loss = f64::INFINITY;
        let mut iterations = 0;
        let mut converged = false;
        let mut final_loss = f64::INFINITY;

        for _ in 0..self.config.max_iter {
            iterations += 1;

            // Forward pass and log loss.
            let mut loss = 0.0;
            let mut residuals = Vec::with_capacity(n);
            for i in 0..n {
                let p = sigmoid(features.row_dot(i, &weights) + intercept);
                loss -= targets[i] * safe_ln(p) + (1.0 - targets[i]) * safe_ln(1.0 - p);
                residuals.push(p - targets[i]);
            }
            loss /= n as f64;
            final_loss = loss;

            // Gradient step.
            let mut gradient = vec![0.0; n_features];
            let mut intercept_gradient = 0.0;
            for (i, &residual) in residuals.iter().enumerate() {
                features.add_row_scaled(i, residual, &mut gradient);
                intercept_gradient += residual;
            }
            let scale = self.config.learning_rate / n as f64;
            for (w, g) in weights.iter_mut().zip(&gradient) {
                *w -= scale * g;
            }
            if self.config.fit_intercept {
                intercept -= scale * intercept_gradient;
            }

            if (previous_loss - loss).abs() < self.config.tolerance {
                converged = true;
                break;
            }
            previous_loss = loss;
        }

        self.weights = weights;
        self.intercept = intercept;
        self.stats = Some(TrainingStats {
            iterations,
            final_loss,
            converged,
        });
        Ok(())
    }

    fn predict(&self, features: &dyn FeatureMatrix) -> Result<Vec<Sentiment>> {
        let probs = self.predict_proba(features)?;
        Ok(probs
            .into_iter()
            .map(|p| {
                if p >= 0.5 {
                    Sentiment::Positive
                } else {
                    Sentiment::Negative
                }
            })
            .collect())
    }

    fn is_trained(&self) -> bool {
        self.stats.is_some()
    }

    fn name(&self) -> &'static str {
        "logistic_regression"
    }
}

impl std::fmt::Debug for LogisticRegression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogisticRegression")
            .field("config", &self.config)
            .field("n_features", &self.weights.len())
            .field("trained", &self.is_trained())
            .finish()
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

fn safe_ln(x: f64) -> f64 {
    // Clamp away from zero so a saturated sigmoid cannot produce -inf loss.
    x.max(1e-15).ln()
}
