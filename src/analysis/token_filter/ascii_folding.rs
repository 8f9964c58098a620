//! ASCII folding filter implementation.
//!
//! Folds letters outside the Basic Latin block to their closest ASCII
//! equivalent: decomposable letters lose their combining marks (`ó` → `o`),
//! and letters with no canonical decomposition (`ł`, `ø`, `ß`, ...) go
//! through a small substitution table.
//!
//! # Examples
//!
//! ```
//! use phalanx::analysis::token_filter::Filter;
//! use phalanx::analysis::token_filter::ascii_folding::AsciiFoldingFilter;
//! use phalanx::analysis::token::Token;
//!
//! let filter = AsciiFoldingFilter::new();
//! let tokens = vec![Token::new("Kółko", 0)];
//! let folded: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(folded[0].text, "Kolko");
//! ```

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that folds accented and special Latin letters to ASCII.
#[derive(Clone, Debug, Default)]
pub struct AsciiFoldingFilter;

impl AsciiFoldingFilter {
    /// Create a new ASCII folding filter.
    pub fn new() -> Self {
        AsciiFoldingFilter
    }

    /// Fold a single word.
    pub fn fold(text: &str) -> String {
        if text.is_ascii() {
            return text.to_string();
        }

        let mut folded = String::with_capacity(text.len());
        for c in text.nfd() {
            if is_combining_mark(c) {
                continue;
            }
            match Self::substitute(c) {
                Some(replacement) => folded.push_str(replacement),
                None => folded.push(c),
            }
        }
        folded
    }

    fn substitute(c: char) -> Option<&'static str> {
        let replacement = match c {
            'ł' => "l",
            'Ł' => "L",
            'đ' => "d",
            'Đ' => "D",
            'ð' => "d",
            'Ð' => "D",
            'ø' => "o",
            'Ø' => "O",
            'ħ' => "h",
            'Ħ' => "H",
            'ı' => "i",
            'ß' => "ss",
            'æ' => "ae",
            'Æ' => "AE",
            'œ' => "oe",
            'Œ' => "OE",
            'þ' => "th",
            'Þ' => "TH",
            _ => return None,
        };
        Some(replacement)
    }
}

impl Filter for AsciiFoldingFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            if token.text.is_ascii() {
                token
            } else {
                let folded = Self::fold(&token.text);
                token.with_text(folded)
            }
        })))
    }

    fn name(&self) -> &'static str {
        "asciifolding"
    }
}
