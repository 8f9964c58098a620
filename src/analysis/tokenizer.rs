//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of every pipeline, responsible for splitting
//! input text into tokens. Offsets are reported in character units so that
//! tokens from different pipelines over the same text line up.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//! - [`regex::RegexTokenizer`] - Custom regex-based tokenization
//! - [`whole::WholeTokenizer`] - Treats entire text as single token
//!
//! # Examples
//!
//! ```
//! use phalanx::analysis::tokenizer::Tokenizer;
//! use phalanx::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// ```
/// use phalanx::analysis::token::{Token, TokenStream};
/// use phalanx::analysis::tokenizer::Tokenizer;
/// use phalanx::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Converts increasing byte offsets into character offsets in one pass.
#[derive(Debug, Default)]
pub(crate) struct CharCursor {
    byte: usize,
    chars: usize,
}

impl CharCursor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Character offset of `byte`, which must not precede the last call.
    pub(crate) fn advance_to(&mut self, text: &str, byte: usize) -> usize {
        if byte > self.byte {
            self.chars += text[self.byte..byte].chars().count();
            self.byte = byte;
        }
        self.chars
    }
}

pub mod regex;
pub mod unicode_word;
pub mod whitespace;
pub mod whole;

pub use regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
pub use whole::WholeTokenizer;
