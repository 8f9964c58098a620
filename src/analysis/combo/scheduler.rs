//! K-way merge of pipeline adapters by absolute position.
//!
//! Every adapter holds its next token. The adapters sit in a [`MergeQueue`]
//! ordered by the held token's position (plus a tie-break key), so the queue
//! top always holds the smallest pending position. A batch is produced by
//! repeatedly stepping the top adapter while its held token is still at the
//! batch position; an adapter whose zero-increment chain continues stays on
//! top and keeps contributing.

use std::cmp::Ordering;

use crate::analysis::combo::adapter::{PipelineAdapter, PositionedToken};
use crate::analysis::combo::config::TieBreak;
use crate::analysis::combo::queue::MergeQueue;

/// Tokens from all pipelines that share one absolute position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionBatch {
    pub position: i64,
    pub tokens: Vec<PositionedToken>,
}

/// Lifecycle of a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No adapter has produced its first token yet.
    Priming,
    /// Batches are being produced.
    EmittingBatch,
    /// Every adapter is drained. Terminal.
    Exhausted,
}

/// Merges the outputs of several pipeline adapters into position batches.
pub struct MergeScheduler {
    pending: Vec<PipelineAdapter>,
    queue: MergeQueue<PipelineAdapter>,
    state: SchedulerState,
}

impl MergeScheduler {
    /// Create a scheduler over adapters given in declaration order.
    pub fn new(adapters: Vec<PipelineAdapter>, tie_break: TieBreak) -> Self {
        let compare = match tie_break {
            TieBreak::DeclarationOrder => by_declaration_order,
            TieBreak::OffsetQueue => by_offsets,
        };

        MergeScheduler {
            queue: MergeQueue::with_capacity(adapters.len(), compare),
            pending: adapters,
            state: SchedulerState::Priming,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Produce the next batch, or `None` once every adapter is drained.
    pub fn next_batch(&mut self) -> Option<PositionBatch> {
        if self.state == SchedulerState::Priming {
            self.prime();
        }
        if self.state == SchedulerState::Exhausted {
            return None;
        }

        let Some(position) = self.queue.peek().and_then(PipelineAdapter::head_position) else {
            self.state = SchedulerState::Exhausted;
            return None;
        };

        let mut tokens = Vec::new();
        loop {
            let exhausted = match self.queue.peek_mut() {
                Some(top) if top.head_position() == Some(position) => {
                    tokens.extend(top.step());
                    top.is_exhausted()
                }
                _ => break,
            };

            if exhausted {
                self.queue.pop();
            } else {
                self.queue.resift_top();
            }
        }

        if self.queue.is_empty() {
            self.state = SchedulerState::Exhausted;
        }

        Some(PositionBatch { position, tokens })
    }

    fn prime(&mut self) {
        for mut adapter in self.pending.drain(..) {
            if adapter.prime() {
                self.queue.push(adapter);
            }
        }

        self.state = if self.queue.is_empty() {
            SchedulerState::Exhausted
        } else {
            SchedulerState::EmittingBatch
        };
    }
}

impl Iterator for MergeScheduler {
    type Item = PositionBatch;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_batch()
    }
}

impl std::fmt::Debug for MergeScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergeScheduler")
            .field("state", &self.state)
            .field("active", &self.queue.len())
            .finish()
    }
}

fn by_declaration_order(a: &PipelineAdapter, b: &PipelineAdapter) -> Ordering {
    a.head_position()
        .cmp(&b.head_position())
        .then_with(|| a.index().cmp(&b.index()))
}

fn by_offsets(a: &PipelineAdapter, b: &PipelineAdapter) -> Ordering {
    let key = |adapter: &PipelineAdapter| {
        adapter
            .head()
            .map(|h| (h.position, h.token.start_offset, h.token.end_offset))
    };
    key(a).cmp(&key(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer, KeywordAnalyzer, WhitespaceAnalyzer};
    use crate::analysis::token::{IntoTokenStream, Token};

    fn scheduler_for(analyzers: &[&dyn Analyzer], text: &str, tie_break: TieBreak) -> MergeScheduler {
        let adapters = analyzers
            .iter()
            .enumerate()
            .map(|(i, analyzer)| PipelineAdapter::open(i, *analyzer, text).unwrap())
            .collect();
        MergeScheduler::new(adapters, tie_break)
    }

    fn flatten(scheduler: MergeScheduler) -> Vec<(i64, String)> {
        scheduler
            .flat_map(|batch| batch.tokens)
            .map(|t| (t.position, t.token.text))
            .collect()
    }

    fn owned(expected: &[(i64, &str)]) -> Vec<(i64, String)> {
        expected.iter().map(|(p, t)| (*p, t.to_string())).collect()
    }

    #[test]
    fn test_state_transitions() {
        let mut scheduler = MergeScheduler::new(
            vec![PipelineAdapter::from_stream(
                0,
                vec![Token::new("only", 0)].into_token_stream(),
            )],
            TieBreak::DeclarationOrder,
        );
        assert_eq!(scheduler.state(), SchedulerState::Priming);

        let batch = scheduler.next_batch().unwrap();
        assert_eq!(batch.position, 0);
        assert_eq!(scheduler.state(), SchedulerState::Exhausted);
        assert!(scheduler.next_batch().is_none());
    }

    #[test]
    fn test_no_adapters() {
        let mut scheduler = MergeScheduler::new(Vec::new(), TieBreak::DeclarationOrder);
        assert!(scheduler.next_batch().is_none());
        assert_eq!(scheduler.state(), SchedulerState::Exhausted);
    }

    #[test]
    fn test_declaration_order_batches() {
        let whitespace = WhitespaceAnalyzer::new();
        let english = EnglishAnalyzer::new();
        let keyword = KeywordAnalyzer::new();
        let scheduler = scheduler_for(
            &[&whitespace, &english, &keyword],
            "just a little test",
            TieBreak::DeclarationOrder,
        );

        let batches: Vec<(i64, Vec<String>)> = scheduler
            .map(|b| (b.position, b.tokens.into_iter().map(|t| t.token.text).collect()))
            .collect();

        let expected: Vec<(i64, Vec<String>)> = vec![
            (0, vec!["just", "just", "just a little test"]),
            (1, vec!["a"]),
            (2, vec!["little", "littl"]),
            (3, vec!["test", "test"]),
        ]
        .into_iter()
        .map(|(p, texts)| (p, texts.into_iter().map(String::from).collect()))
        .collect();
        assert_eq!(batches, expected);
    }

    #[test]
    fn test_offset_queue_order() {
        let whitespace = WhitespaceAnalyzer::new();
        let english = EnglishAnalyzer::new();
        let keyword = KeywordAnalyzer::new();
        let scheduler = scheduler_for(
            &[&whitespace, &english, &keyword],
            "just a little test",
            TieBreak::OffsetQueue,
        );

        assert_eq!(
            flatten(scheduler),
            owned(&[
                (0, "just"),
                (0, "just"),
                (0, "just a little test"),
                (1, "a"),
                (2, "littl"),
                (2, "little"),
                (3, "test"),
                (3, "test"),
            ])
        );
    }

    #[test]
    fn test_zero_increment_chain_stays_together() {
        let first = vec![
            Token::new("quick", 0),
            Token::new("fast", 0).with_position_increment(0),
            Token::new("rapid", 0).with_position_increment(0),
            Token::new("fox", 1),
        ];
        let second = vec![Token::new("quick", 0), Token::new("fox", 1)];
        let scheduler = MergeScheduler::new(
            vec![
                PipelineAdapter::from_stream(0, first.into_token_stream()),
                PipelineAdapter::from_stream(1, second.into_token_stream()),
            ],
            TieBreak::DeclarationOrder,
        );

        assert_eq!(
            flatten(scheduler),
            owned(&[
                (0, "quick"),
                (0, "fast"),
                (0, "rapid"),
                (0, "quick"),
                (1, "fox"),
                (1, "fox"),
            ])
        );
    }

    #[test]
    fn test_later_pipeline_leads_when_earlier_lags() {
        let first = vec![Token::new("b", 0).with_position_increment(3)];
        let second = vec![Token::new("a", 0)];
        let scheduler = MergeScheduler::new(
            vec![
                PipelineAdapter::from_stream(0, first.into_token_stream()),
                PipelineAdapter::from_stream(1, second.into_token_stream()),
            ],
            TieBreak::DeclarationOrder,
        );

        assert_eq!(flatten(scheduler), owned(&[(0, "a"), (2, "b")]));
    }

    #[test]
    fn test_empty_adapter_is_skipped() {
        let scheduler = MergeScheduler::new(
            vec![
                PipelineAdapter::from_stream(0, Vec::new().into_token_stream()),
                PipelineAdapter::from_stream(1, vec![Token::new("x", 0)].into_token_stream()),
            ],
            TieBreak::DeclarationOrder,
        );

        assert_eq!(flatten(scheduler), owned(&[(0, "x")]));
    }
}
