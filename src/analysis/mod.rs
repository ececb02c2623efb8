//! Text analysis module for Polarity.
//!
//! This module provides the text analysis functionality the vectorizers are
//! built on: tokenization, filtering, and analyzer pipelines combining the
//! two.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
