//! Level and score counters

use serde::{Deserialize, Serialize};

/// Progression readout: level starts at 1, score at 0, both only ever count up
/// until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    level: u32,
    score: u64,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self { level: 1, score: 0 }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Advance one level (unbounded). Returns the new level.
    pub fn level_up(&mut self) -> u32 {
        self.level = self.level.saturating_add(1);
        self.level
    }

    /// Add one point. Returns the new score.
    pub fn score_up(&mut self) -> u64 {
        self.score = self.score.saturating_add(1);
        self.score
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_level_one() {
        let dash = Dashboard::new();
        assert_eq!(dash.level(), 1);
        assert_eq!(dash.score(), 0);
    }

    #[test]
    fn test_level_and_score_count_up() {
        let mut dash = Dashboard::new();
        assert_eq!(dash.level_up(), 2);
        assert_eq!(dash.level_up(), 3);
        assert_eq!(dash.score_up(), 1);
        assert_eq!(dash.level(), 3);
        assert_eq!(dash.score(), 1);
    }

    #[test]
    fn test_level_has_no_cap() {
        let mut dash = Dashboard::new();
        for _ in 0..20 {
            dash.level_up();
        }
        assert_eq!(dash.level(), 21);
    }

    #[test]
    fn test_reset() {
        let mut dash = Dashboard::new();
        dash.level_up();
        dash.score_up();
        dash.score_up();
        dash.reset();
        assert_eq!(dash, Dashboard::default());
    }
}
