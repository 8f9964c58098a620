//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). It is the tokenizer behind the `standard` analyzer and
//! filters out non-word segments like punctuation and whitespace.
//!
//! # Examples
//!
//! ```
//! use phalanx::analysis::tokenizer::Tokenizer;
//! use phalanx::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world! 你好世界").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::{CharCursor, Tokenizer};
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Segments without a single alphanumeric character are dropped, so
/// punctuation and whitespace never become tokens.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut cursor = CharCursor::new();
        let mut tokens = Vec::new();

        for (byte, word) in text.split_word_bound_indices() {
            if !word.chars().any(|c| c.is_alphanumeric()) {
                continue;
            }
            let start_offset = cursor.advance_to(text, byte);
            let end_offset = cursor.advance_to(text, byte + word.len());
            tokens.push(
                Token::with_offsets(word, tokens.len(), start_offset, end_offset)
                    .with_token_type(TokenType::detect(word)),
            );
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_word_tokenizer() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello, world!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (7, 12));
    }

    #[test]
    fn test_non_ascii_offsets() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("Ławka Kółko słowo").unwrap().collect();

        let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["Ławka", "Kółko", "słowo"]);
        let offsets: Vec<_> = tokens.iter().map(|t| (t.start_offset, t.end_offset)).collect();
        assert_eq!(offsets, vec![(0, 5), (6, 11), (12, 17)]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UnicodeWordTokenizer::new().name(), "unicode_word");
    }
}
