//! Lowercase filter implementation.
//!
//! This module provides a filter that converts all token text to lowercase,
//! which keeps a vocabulary from splitting the same word across casings.
//!
//! # Examples
//!
//! ```
//! use polarity::analysis::token_filter::Filter;
//! use polarity::analysis::token_filter::lowercase::LowercaseFilter;
//! use polarity::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Uses Unicode-aware lowercasing, so non-ASCII text is handled correctly.
/// Token positions are preserved.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lowered = token.text.to_lowercase();
                token.with_text(lowered)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::new("The", 0),
            Token::new("QUICK", 1),
            Token::new("Brown", 2),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "the");
        assert_eq!(result[1].text, "quick");
        assert_eq!(result[2].text, "brown");
    }

    #[test]
    fn test_lowercase_filter_non_ascii() {
        let filter = LowercaseFilter::new();
        let tokens = vec![Token::new("CAFÉ", 0)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "café");
    }

    #[test]
    fn test_lowercase_filter_preserves_positions() {
        let filter = LowercaseFilter::new();
        let tokens = vec![Token::new("A", 0), Token::new("B", 5)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].position, 0);
        assert_eq!(result[1].position, 5);
    }
}
