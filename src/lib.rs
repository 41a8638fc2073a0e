//! Road Fighter - A vertical-scrolling arcade driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (progression, collisions, game state)
//! - `platform`: Tick source and presentation-facing commands
//! - `session`: Single-threaded event queue that owns the game
//! - `scene`: Headless presentation geometry (road, traffic, player car)
//! - `settings`: Preferences for the headless driver
//! - `autopilot`: Seeded demo driver

pub mod autopilot;
pub mod platform;
pub mod scene;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Session, SessionHandle, SessionUpdate};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation tick (10 Hz)
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Ticks per level: level-up fires once `ticks >= level * LEVEL_TICKS`
    pub const LEVEL_TICKS: u64 = 1000;
    /// Ticks per point: score-up fires once `ticks >= score * SCORE_TICKS`
    pub const SCORE_TICKS: u64 = 50;

    /// Horizontal distance moved per left/right press
    pub const CONTROL_STEP: f32 = 10.0;

    /// Road speed at the start of a run
    pub const BASE_ROAD_SPEED: f32 = 3.0;
    /// Added to the road speed on every level-up
    pub const SPEED_STEP: f32 = 1.0;

    /// Scroll duration in seconds, indexed by `level - 1`. Levels past the end use the last entry.
    pub const SPEED_BY_LEVEL: [f32; 6] = [3.0, 2.5, 2.0, 1.5, 1.0, 0.5];

    /// Car sprite size (player and traffic)
    pub const CAR_WIDTH: f32 = 24.0;
    pub const CAR_HEIGHT: f32 = 32.0;

    /// Player car sits this far above the bottom of the layout
    pub const PLAYER_CAR_LIFT: f32 = 200.0;
    /// Layout height extends past the screen so the road loop has no gap
    pub const LAYOUT_OVERSCAN: f32 = 100.0;
    /// Overlap between stacked road segments (hides the seam)
    pub const ROAD_SEAM: f32 = 2.0;

    /// Road cross-section as whole percentages of layout width
    /// (the right shoulder takes the rest)
    pub const LEFT_SHOULDER_PERCENT: f32 = 30.0;
    pub const DRIVING_LANE_PERCENT: f32 = 50.0;
}
