//! Whitespace analyzer: splits on whitespace and keeps terms verbatim.

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// An analyzer that only splits on whitespace.
pub struct WhitespaceAnalyzer {
    inner: PipelineAnalyzer,
}

impl WhitespaceAnalyzer {
    /// Create a new whitespace analyzer.
    pub fn new() -> Self {
        let inner =
            PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new())).with_name("whitespace");
        WhitespaceAnalyzer { inner }
    }
}

impl Default for WhitespaceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for WhitespaceAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl std::fmt::Debug for WhitespaceAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhitespaceAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_whitespace_analyzer_keeps_case() {
        let analyzer = WhitespaceAnalyzer::new();

        let tokens: Vec<Token> = analyzer.analyze("Just a Test").unwrap().collect();

        let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["Just", "a", "Test"]);
        assert!(tokens.iter().all(|t| t.position_increment == 1));
    }
}
