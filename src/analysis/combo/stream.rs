//! Token stream produced by a combo analyzer.

use std::collections::VecDeque;

use crate::analysis::combo::adapter::PositionedToken;
use crate::analysis::combo::dedup::DeduplicationFilter;
use crate::analysis::combo::scheduler::MergeScheduler;
use crate::analysis::token::Token;

/// Flattens merged position batches into output tokens.
///
/// Position increments are recomputed against the previously emitted token,
/// because tokens of different pipelines interleave and their own
/// increments no longer describe the merged sequence.
pub struct ComboTokenStream {
    scheduler: MergeScheduler,
    dedup: Option<DeduplicationFilter>,
    pending: VecDeque<PositionedToken>,
    last_position: i64,
}

impl ComboTokenStream {
    pub fn new(scheduler: MergeScheduler, dedup: Option<DeduplicationFilter>) -> Self {
        ComboTokenStream {
            scheduler,
            dedup,
            pending: VecDeque::new(),
            last_position: -1,
        }
    }

    fn emit(&mut self, positioned: PositionedToken) -> Token {
        let PositionedToken {
            mut token,
            position,
            ..
        } = positioned;

        token.position_increment = (position - self.last_position).max(0) as usize;
        token.position = position.max(0) as usize;
        self.last_position = position;
        token
    }
}

impl Iterator for ComboTokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(positioned) = self.pending.pop_front() {
                return Some(self.emit(positioned));
            }

            let mut batch = self.scheduler.next_batch()?;
            if let Some(dedup) = &self.dedup {
                dedup.apply(&mut batch);
            }
            self.pending.extend(batch.tokens);
        }
    }
}

impl std::fmt::Debug for ComboTokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComboTokenStream")
            .field("scheduler", &self.scheduler)
            .field("dedup", &self.dedup.is_some())
            .field("last_position", &self.last_position)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::combo::adapter::PipelineAdapter;
    use crate::analysis::combo::config::TieBreak;
    use crate::analysis::token::IntoTokenStream;

    fn stream(pipelines: Vec<Vec<Token>>, dedup: bool) -> ComboTokenStream {
        let adapters = pipelines
            .into_iter()
            .enumerate()
            .map(|(i, tokens)| PipelineAdapter::from_stream(i, tokens.into_token_stream()))
            .collect();
        let scheduler = MergeScheduler::new(adapters, TieBreak::DeclarationOrder);
        ComboTokenStream::new(scheduler, dedup.then(DeduplicationFilter::new))
    }

    #[test]
    fn test_increments_follow_emitted_positions() {
        let first = vec![
            Token::with_offsets("quick", 0, 0, 5),
            Token::with_offsets("fox", 1, 12, 15).with_position_increment(2),
        ];
        let second = vec![
            Token::with_offsets("quick", 0, 0, 5),
            Token::with_offsets("brown", 1, 6, 11),
            Token::with_offsets("fox", 2, 12, 15),
        ];

        let tokens: Vec<_> = stream(vec![first, second], false).collect();
        let summary: Vec<_> = tokens
            .iter()
            .map(|t| (t.text.as_str(), t.position, t.position_increment))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("quick", 0, 1),
                ("quick", 0, 0),
                ("brown", 1, 1),
                ("fox", 2, 1),
                ("fox", 2, 0),
            ]
        );
    }

    #[test]
    fn test_dedup_applies_per_position() {
        let first = vec![Token::new("a", 0), Token::new("b", 1)];
        let second = vec![Token::new("a", 0), Token::new("a", 1)];

        let texts: Vec<_> = stream(vec![first, second], true).map(|t| t.text).collect();

        assert_eq!(texts, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_leading_zero_increment_clamps() {
        let only = vec![
            Token::new("x", 0).with_position_increment(0),
            Token::new("y", 1),
        ];

        let tokens: Vec<_> = stream(vec![only], false).collect();

        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].position_increment, 0);
        assert_eq!(tokens[1].position, 0);
        assert_eq!(tokens[1].position_increment, 1);
    }
}
