//! Looping road: scroll offset, speed, and shoulder bounds

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{BASE_ROAD_SPEED, ROAD_SEAM, SPEED_STEP};

/// Road sub-state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    /// Scroll offset for the looping animation
    offset: f32,
    /// Grows by `SPEED_STEP` per level-up
    speed: f32,
    /// Shoulder bounds reported by visible road segments (append-only until reset)
    rects: Vec<Rect>,
}

impl Default for Road {
    fn default() -> Self {
        Self {
            offset: 0.0,
            speed: BASE_ROAD_SPEED,
            rects: Vec::new(),
        }
    }
}

impl Road {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Vertical positions of the two stacked road segments.
    ///
    /// The second segment sits one layout height above the first (less the
    /// seam overlap), so scrolling both by `offset` loops without a gap.
    pub fn segment_offsets(&self, max_height: f32) -> [f32; 2] {
        [self.offset, self.offset - max_height + ROAD_SEAM]
    }

    pub fn report_rect(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    /// Bump speed by a fixed step.
    ///
    /// The requested (table) speed is recorded by the caller but not applied;
    /// the stored speed always grows by `SPEED_STEP`.
    pub fn increase_speed(&mut self, requested: f32) -> f32 {
        log::trace!("Road speed request {} (applying +{})", requested, SPEED_STEP);
        self.speed += SPEED_STEP;
        self.speed
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.speed = BASE_ROAD_SPEED;
        self.rects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_speed_ignores_request() {
        let mut road = Road::new();
        assert_eq!(road.speed(), 3.0);
        assert_eq!(road.increase_speed(2.5), 4.0);
        assert_eq!(road.increase_speed(0.5), 5.0);
        assert_eq!(road.increase_speed(100.0), 6.0);
    }

    #[test]
    fn test_rects_append() {
        let mut road = Road::new();
        let left = Rect::new(0.0, 0.0, 120.0, 900.0);
        road.report_rect(left);
        road.report_rect(left);
        assert_eq!(road.rects().len(), 2);
    }

    #[test]
    fn test_segment_offsets() {
        let mut road = Road::new();
        road.set_offset(300.0);
        assert_eq!(road.segment_offsets(900.0), [300.0, -598.0]);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut road = Road::new();
        road.set_offset(900.0);
        road.increase_speed(2.5);
        road.report_rect(Rect::new(0.0, 0.0, 10.0, 10.0));

        road.reset();
        assert_eq!(road, Road::default());
        assert!(road.rects().is_empty());
    }
}
