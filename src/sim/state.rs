//! Game state and core simulation types
//!
//! `GameState` composes the sub-states. Sub-states never talk to each other;
//! every cross-component reaction is driven from `tick`.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::collision::CollisionResult;
use super::dashboard::Dashboard;
use super::player::{Controls, PlayerCar, SharedOffset};
use super::rect::Rect;
use super::road::Road;
use super::traffic::Traffic;
use crate::consts::SPEED_BY_LEVEL;

/// Overall game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Ticking (also the state before the first start)
    #[default]
    Running,
    /// Crashed; waiting for a restart
    Over,
}

/// Notable things that happened while handling a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began (or restarted)
    Started,
    /// Level advanced
    LevelUp { level: u32 },
    /// Score advanced
    ScoreUp { score: u64 },
    /// Road speed changed after a level-up
    SpeedChanged { requested: f32, speed: f32 },
    /// Player hit something
    Collision(CollisionResult),
    /// Run ended
    GameOver { level: u32, score: u64, ticks: u64 },
}

/// Scroll duration the level table asks for (last entry covers higher levels)
pub fn speed_for_level(level: u32) -> f32 {
    let index = (level.max(1) - 1) as usize;
    SPEED_BY_LEVEL[index.min(SPEED_BY_LEVEL.len() - 1)]
}

/// Complete game state
///
/// Not `Clone`: a copy would alias the player offset.
#[derive(Debug)]
pub struct GameState {
    pub status: GameStatus,
    /// Ticks since the current run started
    pub tick_count: u64,
    pub dashboard: Dashboard,
    pub road: Road,
    pub traffic: Traffic,
    pub player: PlayerCar,
    pub controls: Controls,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        let offset = SharedOffset::default();
        Self {
            status: GameStatus::Running,
            tick_count: 0,
            dashboard: Dashboard::new(),
            road: Road::new(),
            traffic: Traffic::new(),
            player: PlayerCar::new(offset.clone()),
            controls: Controls::new(offset),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            tick_count: self.tick_count,
            level: self.dashboard.level(),
            score: self.dashboard.score(),
            road_speed: self.road.speed(),
            road_offset: self.road.offset(),
            player_offset: self.player.offset(),
            player_rect: self.player.rect(),
            traffic_count: self.traffic.len(),
            traffic_epoch: self.traffic.epoch(),
        }
    }
}

/// What the presentation layer needs to draw a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub tick_count: u64,
    pub level: u32,
    pub score: u64,
    pub road_speed: f32,
    pub road_offset: f32,
    pub player_offset: f32,
    pub player_rect: Option<Rect>,
    pub traffic_count: usize,
    /// Traffic animation phase origin
    #[serde(skip)]
    pub traffic_epoch: Instant,
}
