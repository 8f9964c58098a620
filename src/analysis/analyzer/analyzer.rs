//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the interface every pipeline
//! exposes to the rest of the crate, including the combo analyzer which both
//! consumes analyzers and is one.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Index
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
//! - [`StandardAnalyzer`](super::standard::StandardAnalyzer) - Unicode words, lowercased
//! - [`WhitespaceAnalyzer`](super::whitespace::WhitespaceAnalyzer) - Whitespace split, verbatim
//! - [`KeywordAnalyzer`](super::keyword::KeywordAnalyzer) - Treats entire input as one token
//! - [`EnglishAnalyzer`](super::language::english::EnglishAnalyzer) - Stop words and stemming
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`ComboAnalyzer`](crate::analysis::combo::ComboAnalyzer) - Several analyzers merged by position
//!
//! # Examples
//!
//! ```
//! use phalanx::analysis::analyzer::analyzer::Analyzer;
//! use phalanx::analysis::token::TokenStream;
//! use phalanx::error::Result;
//!
//! struct EmptyAnalyzer;
//!
//! impl Analyzer for EmptyAnalyzer {
//!     fn analyze(&self, _text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "empty"
//!     }
//!
//!     fn as_any(&self) -> &dyn std::any::Any {
//!         self
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// An analyzer is expected to be deterministic: analyzing the same text twice
/// yields the same tokens. Every call produces a fresh stream.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so a single analyzer instance can serve
/// many concurrent analysis requests.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the type name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Provide access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn std::any::Any;
}
