//! Fixed timestep simulation tick
//!
//! Core game loop: advance the tick counter, fire progression thresholds,
//! then check the latest reported geometry for a crash. Each timer firing
//! runs `tick` followed by `check_collision` (see `step`).

use super::collision::detect_collision;
use super::state::{GameEvent, GameState, GameStatus, speed_for_level};
use crate::consts::{LEVEL_TICKS, SCORE_TICKS};

/// Begin a run: status back to Running and the tick counter back to zero
pub fn start(state: &mut GameState) -> Vec<GameEvent> {
    state.status = GameStatus::Running;
    state.tick_count = 0;
    log::info!(
        "Run started (level {}, score {})",
        state.dashboard.level(),
        state.dashboard.score()
    );
    vec![GameEvent::Started]
}

/// Advance game time by one tick and apply progression
///
/// Both thresholds read the level and score as they were before this tick,
/// so a level-up and a score-up can fire on the same tick.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // A finished run does not advance
    if state.status == GameStatus::Over {
        log::trace!("Tick ignored: game over");
        return events;
    }

    state.tick_count += 1;

    let level = u64::from(state.dashboard.level());
    let score = state.dashboard.score();
    let level_due = state.tick_count >= level.saturating_mul(LEVEL_TICKS);
    let score_due = state.tick_count >= score.saturating_mul(SCORE_TICKS);

    if level_due {
        level_up(state, &mut events);
    }

    if score_due {
        let score = state.dashboard.score_up();
        log::debug!("Score {} at tick {}", score, state.tick_count);
        events.push(GameEvent::ScoreUp { score });
    }

    events
}

/// React to a level-up: look up the table speed and ask the road to speed up
fn level_up(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let level = state.dashboard.level_up();
    events.push(GameEvent::LevelUp { level });

    let requested = speed_for_level(level);
    let speed = state.road.increase_speed(requested);
    log::info!(
        "Level {} at tick {} (table speed {}, road speed {})",
        level,
        state.tick_count,
        requested,
        speed
    );
    events.push(GameEvent::SpeedChanged { requested, speed });
}

/// Check the player against the latest traffic and road bounds.
/// A hit ends the run.
pub fn check_collision(state: &mut GameState) -> Vec<GameEvent> {
    if state.status == GameStatus::Over {
        return Vec::new();
    }

    match detect_collision(state.player.rect(), &state.traffic, &state.road) {
        Some(hit) => {
            log::info!(
                "Collision with {:?} at tick {} (player {:?}, obstacle {:?})",
                hit.obstacle,
                state.tick_count,
                hit.player,
                hit.other
            );
            let mut events = vec![GameEvent::Collision(hit)];
            events.extend(game_over(state));
            events
        }
        None => Vec::new(),
    }
}

/// End the run and reset dashboard, traffic, and road.
///
/// The player car and controls keep their offset and last rect.
pub fn game_over(state: &mut GameState) -> Vec<GameEvent> {
    let summary = GameEvent::GameOver {
        level: state.dashboard.level(),
        score: state.dashboard.score(),
        ticks: state.tick_count,
    };
    log::info!("Game over: {:?}", summary);

    state.tick_count = 0;
    state.status = GameStatus::Over;

    state.dashboard.reset();
    state.traffic.reset();
    state.road.reset();

    vec![summary]
}

/// One timer firing: `tick` then `check_collision`
pub fn step(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = tick(state);
    events.extend(check_collision(state));
    events
}
