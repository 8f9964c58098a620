//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::{CharCursor, Tokenizer};
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::{PhalanxError, Result};

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// Backs the `pattern` analyzer type.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern `\w+`.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(Self::compile(pattern)?),
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(Self::compile(pattern)?),
            gaps: true,
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(pattern)
            .map_err(|e| PhalanxError::invalid_config(format!("Invalid regex pattern: {e}")))
    }

    /// Byte ranges of the pieces this tokenizer keeps.
    fn spans(&self, text: &str) -> Vec<(usize, usize)> {
        if !self.gaps {
            return self
                .pattern
                .find_iter(text)
                .filter(|m| !m.is_empty())
                .map(|m| (m.start(), m.end()))
                .collect();
        }

        let mut spans = Vec::new();
        let mut last_end = 0;
        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                spans.push((last_end, mat.start()));
            }
            last_end = mat.end();
        }
        if last_end < text.len() {
            spans.push((last_end, text.len()));
        }
        spans
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut cursor = CharCursor::new();
        let tokens: Vec<Token> = self
            .spans(text)
            .into_iter()
            .enumerate()
            .map(|(position, (start, end))| {
                let word = &text[start..end];
                let start_offset = cursor.advance_to(text, start);
                let end_offset = cursor.advance_to(text, end);
                Token::with_offsets(word, position, start_offset, end_offset)
                    .with_token_type(TokenType::detect(word))
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world-test").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
        assert_eq!(tokens[2].start_offset, 12);
    }

    #[test]
    fn test_regex_tokenizer_gaps() {
        let tokenizer = RegexTokenizer::with_gaps(r"\s*,\s*").unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("red, green ,blue").unwrap().collect();

        let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["red", "green", "blue"]);
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (12, 16));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = RegexTokenizer::with_pattern("[unclosed");
        assert!(matches!(result, Err(PhalanxError::Config(_))));
    }
}
