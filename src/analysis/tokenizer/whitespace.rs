//! Whitespace tokenizer implementation.

use super::{CharCursor, Tokenizer};

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Terms are kept verbatim, including case and punctuation.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut cursor = CharCursor::new();
        let mut word_start: Option<usize> = None;

        for (byte, c) in text.char_indices() {
            match (c.is_whitespace(), word_start) {
                (true, Some(start)) => {
                    tokens.push(Self::make_token(text, start, byte, tokens.len(), &mut cursor));
                    word_start = None;
                }
                (false, None) => word_start = Some(byte),
                _ => {}
            }
        }
        if let Some(start) = word_start {
            tokens.push(Self::make_token(text, start, text.len(), tokens.len(), &mut cursor));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

impl WhitespaceTokenizer {
    fn make_token(
        text: &str,
        start: usize,
        end: usize,
        position: usize,
        cursor: &mut CharCursor,
    ) -> Token {
        let word = &text[start..end];
        let start_offset = cursor.advance_to(text, start);
        let end_offset = cursor.advance_to(text, end);
        Token::with_offsets(word, position, start_offset, end_offset)
            .with_token_type(TokenType::detect(word))
    }
}
