//! Analyzer implementations combining tokenizers and filters.
//!
//! Analyzers serve as the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Vocabulary
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`StandardAnalyzer`] - Unicode word splitting plus lowercasing; the
//!   vectorizer default
//! - [`SimpleAnalyzer`] - Tokenization only, no filtering
//! - [`PipelineAnalyzer`] - Custom tokenizer + filter chains

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that process text into tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual analyzer modules
pub mod pipeline;
pub mod simple;
pub mod standard;

// Re-export all analyzers for convenient access
pub use pipeline::PipelineAnalyzer;
pub use simple::SimpleAnalyzer;
pub use standard::StandardAnalyzer;
