//! Evaluation and reporting for classifier predictions.
//!
//! [`accuracy`] is the fraction of exact label matches. An
//! [`EvaluationReport`] pairs the accuracy with a qualitative listing of
//! (text, predicted, actual) examples for eyeballing what the model gets
//! right and wrong. No significance testing or confidence intervals are
//! computed.

use serde::{Deserialize, Serialize};

use crate::corpus::{Corpus, Sentiment};
use crate::error::{PolarityError, Result};

/// Fraction of positions where `predicted` equals `actual`, in [0, 1].
pub fn accuracy(predicted: &[Sentiment], actual: &[Sentiment]) -> Result<f64> {
    if predicted.len() != actual.len() {
        return Err(PolarityError::invalid_argument(format!(
            "{} predictions for {} labels",
            predicted.len(),
            actual.len()
        )));
    }
    if actual.is_empty() {
        return Err(PolarityError::invalid_argument(
            "cannot compute accuracy over zero examples",
        ));
    }

    let matches = predicted
        .iter()
        .zip(actual)
        .filter(|(p, a)| p == a)
        .count();
    Ok(matches as f64 / actual.len() as f64)
}

/// A single qualitative prediction example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionExample {
    /// The document text.
    pub text: String,
    /// The model's predicted label.
    pub predicted: Sentiment,
    /// The true label.
    pub actual: Sentiment,
}

/// The result of evaluating a classifier on a held-out corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Fraction of exact label matches on the held-out set.
    pub accuracy: f64,
    /// Number of held-out examples scored.
    pub n_test: usize,
    /// Size of the fitted vocabulary.
    pub vocabulary_size: usize,
    /// Qualitative prediction examples, in corpus order.
    pub examples: Vec<PredictionExample>,
}

impl EvaluationReport {
    /// Build a report from a test corpus and its predictions, keeping at
    /// most `example_limit` qualitative examples.
    pub fn new(
        test: &Corpus,
        predicted: &[Sentiment],
        vocabulary_size: usize,
        example_limit: usize,
    ) -> Result<Self> {
        let actual = test.labels();
        let accuracy = accuracy(predicted, &actual)?;

        let examples = test
            .documents()
            .iter()
            .zip(predicted)
            .take(example_limit)
            .map(|(doc, &p)| PredictionExample {
                text: doc.text.clone(),
                predicted: p,
                actual: doc.label,
            })
            .collect();

        Ok(EvaluationReport {
            accuracy,
            n_test: actual.len(),
            vocabulary_size,
            examples,
        })
    }
}

impl std::fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "accuracy: {:.4} ({} test documents, vocabulary of {})",
            self.accuracy, self.n_test, self.vocabulary_size
        )?;
        for example in &self.examples {
            let marker = if example.predicted == example.actual {
                ' '
            } else {
                '!'
            };
            writeln!(
                f,
                "{marker} [{} / actual {}] {}",
                example.predicted, example.actual, example.text
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::corpus::Sentiment::{Negative, Positive};

    #[test]
    fn test_accuracy_exact_fraction() {
        let predicted = vec![Positive, Negative, Positive, Positive];
        let actual = vec![Positive, Negative, Negative, Positive];

        let acc = accuracy(&predicted, &actual).unwrap();
        assert!((acc - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_bounds() {
        let all_right = accuracy(&[Positive], &[Positive]).unwrap();
        let all_wrong = accuracy(&[Positive], &[Negative]).unwrap();
        assert_eq!(all_right, 1.0);
        assert_eq!(all_wrong, 0.0);
    }

    #[test]
    fn test_accuracy_rejects_length_mismatch() {
        assert!(accuracy(&[Positive], &[Positive, Negative]).is_err());
    }

    #[test]
    fn test_accuracy_rejects_empty() {
        assert!(accuracy(&[], &[]).is_err());
    }

    #[test]
    fn test_report_examples_limited_and_aligned() {
        let test = Corpus::from_pairs(vec![
            ("first", Positive),
            ("second", Negative),
            ("third", Positive),
        ]);
        let predicted = vec![Positive, Positive, Negative];

        let report = EvaluationReport::new(&test, &predicted, 10, 2).unwrap();

        assert_eq!(report.n_test, 3);
        assert_eq!(report.examples.len(), 2);
        assert_eq!(report.examples[0].text, "first");
        assert_eq!(report.examples[0].predicted, Positive);
        assert_eq!(report.examples[1].actual, Negative);
        assert!((report.accuracy - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_report_display_marks_mistakes() {
        let test = Corpus::from_pairs(vec![("oops", Positive)]);
        let report = EvaluationReport::new(&test, &[Negative], 5, 10).unwrap();

        let rendered = report.to_string();
        assert!(rendered.contains("accuracy: 0.0000"));
        assert!(rendered.contains("! [negative / actual positive] oops"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let test = Corpus::from_pairs(vec![("fine", Positive)]);
        let report = EvaluationReport::new(&test, &[Positive], 3, 10).unwrap();

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"accuracy\":1.0"));
    }
}
