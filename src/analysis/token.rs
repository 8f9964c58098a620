//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing text tokens,
//! which are the fundamental units that flow through every analysis pipeline
//! and through the combo merge.
//!
//! # Core Types
//!
//! - [`Token`] - A single analyzed token with text, offsets and position data
//! - [`TokenType`] - Classification of token content (alphanumeric, CJK, etc.)
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Positions
//!
//! Pipelines describe positions through `position_increment`, the gap to the
//! previous token of the same pipeline. An increment of 0 stacks a token on
//! the previous slot:
//!
//! ```text
//! Input: "machine learning"
//! With synonym: "ml"
//!
//!   Position 0: "machine"  (pos_inc=1)
//!   Position 0: "ml"       (pos_inc=0)  ← same slot
//!   Position 1: "learning" (pos_inc=1)
//! ```
//!
//! # Examples
//!
//! ```
//! use phalanx::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("world", 1, 6, 11).with_token_type(TokenType::Alphanum);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! assert_eq!(token.position_increment, 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Absolute position in the token stream (0-based)
/// - `start_offset` / `end_offset` - Character offsets in the original text
/// - `position_increment` - Position relative to previous token (default: 1)
/// - `token_type` - Optional classification, never interpreted by the merge
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in its token stream (0-based)
    pub position: usize,

    /// The character offset where this token starts in the original text
    pub start_offset: usize,

    /// The character offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 1 (default): Normal increment, next position
    /// - 0: Same position as previous token (e.g., for synonyms)
    /// - >1: Skip positions (e.g., for removed stop words)
    pub position_increment: usize,

    /// Token type classification
    pub token_type: Option<TokenType>,
}

/// Token type classification for different kinds of tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Alphanumeric text (English, Latin scripts)
    Alphanum,
    /// Numeric values
    Num,
    /// CJK (Chinese, Japanese, Korean) characters
    Cjk,
    /// Katakana characters (Japanese)
    Katakana,
    /// Hiragana characters (Japanese)
    Hiragana,
    /// Hangul characters (Korean)
    Hangul,
    /// Punctuation marks
    Punctuation,
    /// The whole input kept as one token
    Keyword,
    /// Other/unknown token types
    Other,
}

impl TokenType {
    /// Classify a word by the scripts it contains.
    pub fn detect(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(|c| c.is_numeric()) {
            return TokenType::Num;
        }

        if word.chars().all(|c| matches!(c, '\u{3040}'..='\u{309F}')) {
            return TokenType::Hiragana;
        }

        if word.chars().all(|c| matches!(c, '\u{30A0}'..='\u{30FF}')) {
            return TokenType::Katakana;
        }

        if word
            .chars()
            .any(|c| matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}'))
        {
            return TokenType::Hangul;
        }

        if word.chars().any(|c| {
            matches!(c,
                '\u{4E00}'..='\u{9FFF}' |  // CJK Unified Ideographs
                '\u{3400}'..='\u{4DBF}' |  // CJK Extension A
                '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
                '\u{2A700}'..='\u{2B73F}' | // CJK Extension C
                '\u{2B740}'..='\u{2B81F}' | // CJK Extension D
                '\u{2B820}'..='\u{2CEAF}'   // CJK Extension E
            )
        }) {
            return TokenType::Cjk;
        }

        if word
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return TokenType::Alphanum;
        }

        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return TokenType::Punctuation;
        }

        TokenType::Other
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
            token_type: None,
        }
    }

    /// Create a new token with text, position, and character offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            position_increment: 1,
            token_type: None,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = Some(token_type);
        self
    }

    /// Replace the text, keeping offsets and position data.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.position_increment, 1);
        assert!(token.token_type.is_none());
    }

    #[test]
    fn test_token_builders() {
        let token = Token::with_offsets("Test", 3, 10, 14)
            .with_text("test")
            .with_position_increment(0)
            .with_token_type(TokenType::Alphanum);

        assert_eq!(token.text, "test");
        assert_eq!(token.start_offset, 10);
        assert_eq!(token.end_offset, 14);
        assert_eq!(token.position_increment, 0);
        assert_eq!(token.token_type, Some(TokenType::Alphanum));
    }

    #[test]
    fn test_detect_token_type() {
        assert_eq!(TokenType::detect("2024"), TokenType::Num);
        assert_eq!(TokenType::detect("kółko"), TokenType::Alphanum);
        assert_eq!(TokenType::detect("ひらがな"), TokenType::Hiragana);
        assert_eq!(TokenType::detect("カタカナ"), TokenType::Katakana);
        assert_eq!(TokenType::detect("東京"), TokenType::Cjk);
        assert_eq!(TokenType::detect("!?"), TokenType::Punctuation);
        assert_eq!(TokenType::detect(""), TokenType::Other);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let collected: Vec<_> = tokens.into_token_stream().collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }
}
