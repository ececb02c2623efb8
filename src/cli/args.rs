//! Command line argument parsing for the Polarity CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Polarity - a bag-of-words sentiment classification pipeline
#[derive(Parser, Debug, Clone)]
#[command(name = "polarity")]
#[command(about = "A bag-of-words sentiment classification pipeline for Rust")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PolarityArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PolarityArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train and evaluate a sentiment classifier on a labeled corpus
    Run(RunArgs),

    /// Show corpus statistics without training anything
    Stats(StatsArgs),
}

/// Arguments for running the pipeline
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Path to the corpus file (one `sentence<TAB>label` record per line)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus_file: PathBuf,

    /// Fraction of documents assigned to the training split
    #[arg(long, default_value_t = 0.7)]
    pub train_fraction: f64,

    /// Weight term-document cells with TF-IDF instead of raw counts
    #[arg(long)]
    pub tfidf: bool,

    /// Reduce the term-document matrix to K dimensions via truncated SVD
    #[arg(long, value_name = "K")]
    pub svd: Option<usize>,

    /// Iteration cap for the logistic regression optimizer
    #[arg(long, default_value_t = 2000)]
    pub max_iter: usize,

    /// Seed for the split and SVD initialization (omit for a random run)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of qualitative prediction examples to print
    #[arg(long, default_value_t = 10)]
    pub examples: usize,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the corpus file (one `sentence<TAB>label` record per line)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus_file: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_command() {
        let args = PolarityArgs::parse_from([
            "polarity",
            "run",
            "corpus.tsv",
            "--tfidf",
            "--svd",
            "500",
            "--seed",
            "42",
        ]);

        match args.command {
            Command::Run(run) => {
                assert_eq!(run.corpus_file, PathBuf::from("corpus.tsv"));
                assert!(run.tfidf);
                assert_eq!(run.svd, Some(500));
                assert_eq!(run.seed, Some(42));
                assert_eq!(run.max_iter, 2000);
                assert_eq!(run.train_fraction, 0.7);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = PolarityArgs::parse_from(["polarity", "-q", "stats", "corpus.tsv"]);
        assert_eq!(args.verbosity(), 0);

        let args = PolarityArgs::parse_from(["polarity", "-vv", "stats", "corpus.tsv"]);
        assert_eq!(args.verbosity(), 2);

        let args = PolarityArgs::parse_from(["polarity", "stats", "corpus.tsv"]);
        assert_eq!(args.verbosity(), 1);
    }
}
