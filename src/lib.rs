//! # Phalanx
//!
//! Text analysis with combo analyzers: several independently configured
//! analysis pipelines run over the same text, and their token streams are
//! merged into one stream ordered by position.
//!
//! ## Features
//!
//! - Tokenizers, token filters and pipeline analyzers
//! - Combo analyzer with k-way positional merge and per-position deduplication
//! - Analyzer registry configured from JSON settings
//! - Command line tool for analyzing text

pub mod analysis;
pub mod cli;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
