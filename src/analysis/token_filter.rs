//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers. They can
//! modify, remove, or add tokens to implement features like lowercasing,
//! accent folding, stemming and stop word removal.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`ascii_folding::AsciiFoldingFilter`] - Folds accented letters to ASCII
//! - [`stop::StopFilter`] - Removes stop words
//! - [`stem::StemFilter`] - Reduces words to their stem form
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Stemmer
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream. A filter that
/// removes tokens must add the removed tokens' position increments to the
/// next token it keeps, so that positions downstream stay correct.
///
/// # Examples
///
/// ```
/// use phalanx::analysis::token::{Token, TokenStream};
/// use phalanx::analysis::token_filter::Filter;
/// use phalanx::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         Ok(Box::new(tokens.map(|t| {
///             let reversed: String = t.text.chars().rev().collect();
///             t.with_text(reversed)
///         })))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod ascii_folding;
pub mod lowercase;
pub mod stem;
pub mod stop;

pub use ascii_folding::AsciiFoldingFilter;
pub use lowercase::LowercaseFilter;
pub use stem::{PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
