//! Idle/demo mode - the AI drives
//!
//! Dodges the nearest car coming down the player's lane, otherwise wanders
//! a little so runs don't all look the same. Seeded, so a given seed and
//! geometry always produce the same presses.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{CAR_WIDTH, CONTROL_STEP};
use crate::platform::Command;
use crate::scene::Layout;
use crate::sim::Rect;

/// How far above the player the autopilot looks for traffic
const LOOK_AHEAD: f32 = 260.0;
/// Chance per frame of a random nudge when the lane is clear
const WANDER_CHANCE: f64 = 0.03;

pub struct Autopilot {
    rng: Pcg32,
    layout: Layout,
}

impl Autopilot {
    pub fn new(seed: u64, layout: Layout) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            layout,
        }
    }

    /// Steering decision for one frame, if any
    pub fn steer(&mut self, offset: f32, traffic: &[Rect]) -> Option<Command> {
        let player = self.layout.player_rect(offset);

        // Danger zone: the player's column widened by a car, from the look-ahead
        // distance down to the player's bottom edge
        let zone = Rect::new(
            player.min().x - CAR_WIDTH / 2.0,
            player.min().y - LOOK_AHEAD,
            player.size.x + CAR_WIDTH,
            LOOK_AHEAD + player.size.y,
        );

        let threat = traffic
            .iter()
            .filter(|car| car.intersects(zone))
            .max_by(|a, b| a.max().y.total_cmp(&b.max().y));

        if let Some(car) = threat {
            let preferred = if car.center().x >= player.center().x {
                Command::Left
            } else {
                Command::Right
            };
            return self.safe(offset, preferred);
        }

        if self.rng.random_bool(WANDER_CHANCE) {
            let preferred = if self.rng.random_bool(0.5) {
                Command::Left
            } else {
                Command::Right
            };
            return self.safe(offset, preferred);
        }

        None
    }

    /// `preferred` if it keeps the car on the road, else the other way, else nothing
    fn safe(&self, offset: f32, preferred: Command) -> Option<Command> {
        let delta = |command: &Command| match command {
            Command::Left => -CONTROL_STEP,
            _ => CONTROL_STEP,
        };
        let opposite = match preferred {
            Command::Left => Command::Right,
            _ => Command::Left,
        };

        [preferred, opposite]
            .into_iter()
            .find(|command| {
                let next = self.layout.player_rect(offset + delta(command));
                self.layout.on_road(next)
            })
    }
}
