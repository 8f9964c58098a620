//! Text analysis for Phalanx.
//!
//! Analyzers turn text into token streams. Most are a tokenizer followed by
//! a chain of token filters; the combo analyzer instead runs several other
//! analyzers and merges their streams by position.
//!
//! - [`token`] - tokens and token streams
//! - [`tokenizer`] - splitting text into tokens
//! - [`token_filter`] - transforming token streams
//! - [`analyzer`] - the `Analyzer` trait and built-in analyzers
//! - [`combo`] - the position-merging combo analyzer
//! - [`registry`] - named analyzers and JSON settings

pub mod analyzer;
pub mod combo;
pub mod registry;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::Analyzer;
pub use combo::{ComboAnalyzer, ComboConfig};
pub use registry::{AnalysisSettings, AnalyzerRegistry};
pub use token::{Token, TokenStream, TokenType};
