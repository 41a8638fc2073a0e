//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed tick only (the caller owns the timer)
//! - Stable iteration order (traffic by car id, road by report order)
//! - No rendering or platform dependencies
//! - Geometry is only ever read as last reported, never computed

pub mod collision;
pub mod dashboard;
pub mod player;
pub mod rect;
pub mod road;
pub mod state;
pub mod tick;
pub mod traffic;

pub use collision::{CollisionResult, Obstacle, detect_collision};
pub use dashboard::Dashboard;
pub use player::{Controls, PlayerCar, SharedOffset};
pub use rect::Rect;
pub use road::Road;
pub use state::{GameEvent, GameSnapshot, GameState, GameStatus, speed_for_level};
pub use tick::{check_collision, game_over, start, step, tick};
pub use traffic::Traffic;
