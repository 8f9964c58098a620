//! Per-pipeline absolute position tracking.

/// Accumulates one pipeline's position increments into absolute positions.
///
/// Every pipeline numbers its positions on its own (stop words and stemmers
/// shift the numbering), so each adapter owns exactly one tracker. The
/// counter starts at -1, which puts a first token with increment 1 at
/// position 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionTracker {
    current: i64,
}

impl PositionTracker {
    /// Create a tracker that has not seen any token yet.
    pub fn new() -> Self {
        PositionTracker { current: -1 }
    }

    /// Apply the increment of the next token and return its absolute position.
    pub fn advance(&mut self, position_increment: usize) -> i64 {
        self.current += position_increment as i64;
        self.current
    }

    /// The absolute position of the last token seen.
    pub fn current(&self) -> i64 {
        self.current
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_token_lands_on_zero() {
        let mut tracker = PositionTracker::new();
        assert_eq!(tracker.current(), -1);
        assert_eq!(tracker.advance(1), 0);
    }

    #[test]
    fn test_increments_accumulate() {
        let mut tracker = PositionTracker::new();
        let positions: Vec<_> = [1, 2, 0, 1].iter().map(|&inc| tracker.advance(inc)).collect();
        assert_eq!(positions, vec![0, 2, 2, 3]);
    }
}
