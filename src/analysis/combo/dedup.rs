//! Removal of repeated terms within one merged position.

use ahash::AHashSet;

use crate::analysis::combo::scheduler::PositionBatch;

/// Drops tokens whose text was already kept earlier in the same batch.
///
/// Only the term text is compared; offsets and token types are ignored. The
/// first occurrence wins and the batch order is otherwise left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeduplicationFilter;

impl DeduplicationFilter {
    pub fn new() -> Self {
        DeduplicationFilter
    }

    pub fn apply(&self, batch: &mut PositionBatch) {
        if batch.tokens.len() < 2 {
            return;
        }

        let mut seen = AHashSet::with_capacity(batch.tokens.len());
        batch
            .tokens
            .retain(|positioned| seen.insert(positioned.token.text.clone()));
    }
}
