//! Player car and its steering controls
//!
//! Both share one horizontal position. `SharedOffset` is the handle to it;
//! anyone can read it, but only `PlayerCar` and `Controls` can write.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use super::rect::Rect;
use crate::consts::CONTROL_STEP;

/// Handle to the player's horizontal position (f32 stored as bits)
#[derive(Debug, Clone, Default)]
pub struct SharedOffset(Arc<AtomicU32>);

impl SharedOffset {
    pub fn new(value: f32) -> Self {
        Self(Arc::new(AtomicU32::new(value.to_bits())))
    }

    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Acquire))
    }

    fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Release);
    }

    fn shift(&self, delta: f32) -> f32 {
        let value = self.get() + delta;
        self.set(value);
        value
    }
}

/// Player car sub-state. Survives game over untouched.
#[derive(Debug, Clone)]
pub struct PlayerCar {
    offset: SharedOffset,
    /// Last reported bounds (None until the presentation reports one)
    rect: Option<Rect>,
}

impl PlayerCar {
    pub fn new(offset: SharedOffset) -> Self {
        Self { offset, rect: None }
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn set_horizontal_offset(&mut self, value: f32) {
        self.offset.set(value);
    }

    pub fn report_rect(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }
}

/// Left/right steering
#[derive(Debug, Clone)]
pub struct Controls {
    offset: SharedOffset,
}

impl Controls {
    pub fn new(offset: SharedOffset) -> Self {
        Self { offset }
    }

    /// Steer left by one step. No screen-edge clamping.
    pub fn left(&mut self) -> f32 {
        self.offset.shift(-CONTROL_STEP)
    }

    /// Steer right by one step. No screen-edge clamping.
    pub fn right(&mut self) -> f32 {
        self.offset.shift(CONTROL_STEP)
    }
}
