//! Oncoming traffic bounds
//!
//! Traffic cars are animated by the presentation layer on their own loops.
//! The simulation never computes their positions; it only keeps the last
//! rectangle each car reported, keyed by a stable car id.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use super::rect::Rect;

/// Traffic sub-state
#[derive(Debug, Clone)]
pub struct Traffic {
    /// Latest bounds per car id (sorted by id for stable iteration)
    rects: BTreeMap<String, Rect>,
    /// Start of the current traffic animation cycle
    epoch: Instant,
}

impl Default for Traffic {
    fn default() -> Self {
        Self::new()
    }
}

impl Traffic {
    pub fn new() -> Self {
        Self {
            rects: BTreeMap::new(),
            epoch: Instant::now(),
        }
    }

    /// Upsert the bounds for one car (last write wins)
    pub fn report_rect(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    /// All reported bounds in id order
    pub fn rects(&self) -> impl Iterator<Item = (&str, Rect)> {
        self.rects.iter().map(|(id, rect)| (id.as_str(), *rect))
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    #[inline]
    pub fn epoch(&self) -> Instant {
        self.epoch
    }

    /// Time since the current animation cycle started
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.epoch)
    }

    /// Forget every car and restart all animation phases from `now`
    pub fn reset_at(&mut self, now: Instant) {
        self.rects.clear();
        self.epoch = now;
    }

    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_upserts_by_id() {
        let mut traffic = Traffic::new();
        traffic.report_rect("car1", Rect::new(0.0, 0.0, 24.0, 32.0));
        traffic.report_rect("car2", Rect::new(50.0, 0.0, 24.0, 32.0));
        traffic.report_rect("car1", Rect::new(0.0, 40.0, 24.0, 32.0));

        assert_eq!(traffic.len(), 2);
        assert_eq!(traffic.rect("car1"), Some(Rect::new(0.0, 40.0, 24.0, 32.0)));
    }

    #[test]
    fn test_rects_in_id_order() {
        let mut traffic = Traffic::new();
        traffic.report_rect("car3", Rect::ZERO);
        traffic.report_rect("car1", Rect::ZERO);
        traffic.report_rect("car2", Rect::ZERO);

        let ids: Vec<&str> = traffic.rects().map(|(id, _)| id).collect();
        assert_eq!(ids, ["car1", "car2", "car3"]);
    }

    #[test]
    fn test_reset_clears_and_moves_epoch() {
        let mut traffic = Traffic::new();
        traffic.report_rect("car1", Rect::new(0.0, 0.0, 24.0, 32.0));
        let later = traffic.epoch() + Duration::from_secs(5);

        traffic.reset_at(later);
        assert!(traffic.is_empty());
        assert_eq!(traffic.rect("car1"), None);
        assert_eq!(traffic.epoch(), later);
        assert_eq!(traffic.elapsed(later + Duration::from_secs(2)), Duration::from_secs(2));
    }

    #[test]
    fn test_elapsed_before_epoch_is_zero() {
        let mut traffic = Traffic::new();
        let now = Instant::now();
        traffic.reset_at(now + Duration::from_secs(1));
        assert_eq!(traffic.elapsed(now), Duration::ZERO);
    }
}
