//! # Polarity
//!
//! A small bag-of-words sentiment classification pipeline for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Flexible text analysis pipeline (tokenizers, filters, analyzers)
//! - Count and TF-IDF document vectorization
//! - Optional truncated SVD dimensionality reduction
//! - Binary logistic classification with accuracy reporting
//!
//! The whole workflow is a strictly sequential, single-threaded sequence of
//! stages; see [`pipeline::SentimentPipeline`].

pub mod analysis;
pub mod classification;
pub mod cli;
pub mod corpus;
pub mod decomposition;
pub mod error;
pub mod evaluate;
pub mod matrix;
pub mod model_selection;
pub mod pipeline;
pub mod vectorize;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
