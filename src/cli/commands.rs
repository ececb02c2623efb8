//! Command implementations for the Polarity CLI.

use std::time::Instant;

use crate::cli::args::{Command, PolarityArgs, RunArgs, StatsArgs};
use crate::cli::output::{CorpusStats, output_result};
use crate::classification::LogisticRegressionConfig;
use crate::corpus::{Sentiment, load_tsv};
use crate::error::Result;
use crate::pipeline::{PipelineConfig, SentimentPipeline, Weighting};

/// Execute a CLI command.
pub fn execute_command(args: PolarityArgs) -> Result<()> {
    match &args.command {
        Command::Run(run_args) => run_pipeline(run_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Train and evaluate a classifier on the given corpus file.
fn run_pipeline(args: RunArgs, cli_args: &PolarityArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Loading corpus from: {}", args.corpus_file.display());
    }
    let corpus = load_tsv(&args.corpus_file)?;
    if cli_args.verbosity() > 1 {
        println!("Loaded {} documents", corpus.len());
    }

    let config = PipelineConfig {
        train_fraction: args.train_fraction,
        weighting: if args.tfidf {
            Weighting::Tfidf
        } else {
            Weighting::Counts
        },
        reduction: args.svd,
        classifier: LogisticRegressionConfig {
            max_iter: args.max_iter,
            ..LogisticRegressionConfig::default()
        },
        seed: args.seed,
        example_limit: args.examples,
        ..PipelineConfig::default()
    };

    let start = Instant::now();
    let report = SentimentPipeline::new(config).run(&corpus)?;
    if cli_args.verbosity() > 1 {
        println!("Pipeline finished in {} ms", start.elapsed().as_millis());
    }

    output_result("Evaluation complete:", &report, cli_args)
}

/// Print corpus statistics without training anything.
fn show_stats(args: StatsArgs, cli_args: &PolarityArgs) -> Result<()> {
    let corpus = load_tsv(&args.corpus_file)?;

    let positive = corpus
        .labels()
        .iter()
        .filter(|&&l| l == Sentiment::Positive)
        .count();
    let total_chars: usize = corpus.documents().iter().map(|d| d.text.len()).sum();

    let stats = CorpusStats {
        total_documents: corpus.len(),
        positive_documents: positive,
        negative_documents: corpus.len() - positive,
        average_length_chars: total_chars as f64 / corpus.len() as f64,
    };

    output_result("Corpus statistics:", &stats, cli_args)
}
