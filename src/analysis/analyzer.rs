//! Analyzer implementations that combine tokenizers and filters.

pub mod analyzer;
pub mod keyword;
pub mod language;
pub mod pipeline;
pub mod standard;
pub mod whitespace;

pub use analyzer::Analyzer;
pub use keyword::KeywordAnalyzer;
pub use language::english::EnglishAnalyzer;
pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;
pub use whitespace::WhitespaceAnalyzer;
