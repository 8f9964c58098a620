//! Pipeline adapters: one sub-analyzer's output as a positioned token source.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::combo::position::PositionTracker;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A token together with its absolute position and the pipeline it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedToken {
    /// The token as the pipeline produced it.
    pub token: Token,
    /// Absolute position within the owning pipeline.
    pub position: i64,
    /// Declaration index of the owning pipeline.
    pub pipeline: usize,
}

enum TokenSource {
    Live(TokenStream),
    Replay { tokens: Arc<[Token]>, next: usize },
}

impl TokenSource {
    fn next_token(&mut self) -> Option<Token> {
        match self {
            TokenSource::Live(stream) => stream.next(),
            TokenSource::Replay { tokens, next } => {
                let token = tokens.get(*next).cloned();
                *next += 1;
                token
            }
        }
    }
}

/// Wraps one pipeline's token stream for a single input text.
///
/// The adapter always holds the pipeline's next token (its head) so the
/// scheduler can compare heads across pipelines. It is single-pass: once
/// drained it stays exhausted, and analyzing another text means opening a
/// new adapter.
pub struct PipelineAdapter {
    index: usize,
    source: TokenSource,
    tracker: PositionTracker,
    head: Option<PositionedToken>,
}

impl PipelineAdapter {
    /// Run `analyzer` over `text` and wrap the resulting stream.
    ///
    /// Failures of the analyzer are returned unchanged.
    pub fn open(index: usize, analyzer: &dyn Analyzer, text: &str) -> Result<Self> {
        Ok(Self::from_stream(index, analyzer.analyze(text)?))
    }

    /// Wrap an already produced token stream.
    pub fn from_stream(index: usize, stream: TokenStream) -> Self {
        Self::with_source(index, TokenSource::Live(stream))
    }

    /// Replay a buffered pipeline output.
    pub fn replay(index: usize, tokens: Arc<[Token]>) -> Self {
        Self::with_source(index, TokenSource::Replay { tokens, next: 0 })
    }

    fn with_source(index: usize, source: TokenSource) -> Self {
        PipelineAdapter {
            index,
            source,
            tracker: PositionTracker::new(),
            head: None,
        }
    }

    /// Declaration index of the pipeline.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The token currently held, if any.
    pub fn head(&self) -> Option<&PositionedToken> {
        self.head.as_ref()
    }

    /// Absolute position of the held token.
    pub fn head_position(&self) -> Option<i64> {
        self.head.as_ref().map(|h| h.position)
    }

    /// Pull the next token from the pipeline into the head slot.
    ///
    /// Returns `false` once the pipeline is exhausted.
    pub fn prime(&mut self) -> bool {
        self.head = self.source.next_token().map(|token| {
            let position = self.tracker.advance(token.position_increment);
            PositionedToken {
                token,
                position,
                pipeline: self.index,
            }
        });
        self.head.is_some()
    }

    /// Hand out the held token and pull the following one.
    pub fn step(&mut self) -> Option<PositionedToken> {
        let emitted = self.head.take();
        if emitted.is_some() {
            self.prime();
        }
        emitted
    }

    /// Whether the pipeline has no held token left.
    pub fn is_exhausted(&self) -> bool {
        self.head.is_none()
    }
}

impl std::fmt::Debug for PipelineAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAdapter")
            .field("index", &self.index)
            .field("position", &self.tracker.current())
            .field("head", &self.head)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::EnglishAnalyzer;
    use crate::analysis::token::IntoTokenStream;

    #[test]
    fn test_adapter_tracks_positions() {
        let mut adapter = PipelineAdapter::open(1, &EnglishAnalyzer::new(), "just a little test")
            .unwrap();
        assert!(adapter.is_exhausted());
        assert!(adapter.prime());

        let mut seen = Vec::new();
        while let Some(head) = adapter.step() {
            seen.push((head.token.text, head.position, head.pipeline));
        }

        assert_eq!(
            seen,
            vec![
                ("just".to_string(), 0, 1),
                ("littl".to_string(), 2, 1),
                ("test".to_string(), 3, 1),
            ]
        );
        assert!(adapter.is_exhausted());
        assert!(adapter.step().is_none());
    }

    #[test]
    fn test_zero_increment_shares_position() {
        let tokens = vec![
            Token::new("quick", 0),
            Token::new("fast", 0).with_position_increment(0),
            Token::new("fox", 1),
        ];
        let mut adapter = PipelineAdapter::from_stream(0, tokens.into_token_stream());
        adapter.prime();

        let positions: Vec<_> = std::iter::from_fn(|| adapter.step().map(|h| h.position)).collect();
        assert_eq!(positions, vec![0, 0, 1]);
    }

    #[test]
    fn test_replay_matches_live() {
        let tokens: Arc<[Token]> = vec![Token::new("a", 0), Token::new("b", 1)].into();
        let mut adapter = PipelineAdapter::replay(2, Arc::clone(&tokens));
        adapter.prime();

        assert_eq!(adapter.head_position(), Some(0));
        assert_eq!(adapter.step().map(|h| h.token.text), Some("a".to_string()));
        assert_eq!(adapter.step().map(|h| h.token.text), Some("b".to_string()));
        assert!(adapter.step().is_none());
    }
}
