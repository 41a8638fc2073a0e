//! Road Fighter entry point
//!
//! Runs the game headless: this binary plays the presentation layer,
//! reporting road, traffic, and player geometry every frame while the
//! session ticks on its own thread.

use std::path::Path;
use std::thread;
use std::time::Instant;

use road_fighter::autopilot::Autopilot;
use road_fighter::platform::Command;
use road_fighter::scene::Layout;
use road_fighter::sim::{GameEvent, GameSnapshot, GameStatus, Road};
use road_fighter::{Session, SessionHandle, SessionUpdate, Settings};

/// Presentation-side driver holding everything a renderer would
struct Driver {
    settings: Settings,
    layout: Layout,
    handle: SessionHandle,
    autopilot: Option<Autopilot>,
    snapshot: Option<GameSnapshot>,
    /// Offset the last player rect was reported for
    reported_offset: Option<f32>,
    /// Restart sent, waiting for the session to confirm
    restarting: bool,
    runs_finished: u32,
    best_score: u64,
}

impl Driver {
    fn new(settings: Settings, handle: SessionHandle) -> Self {
        let layout = settings.layout();
        let autopilot = settings
            .autopilot
            .then(|| Autopilot::new(settings.seed, layout));
        Self {
            settings,
            layout,
            handle,
            autopilot,
            snapshot: None,
            reported_offset: None,
            restarting: false,
            runs_finished: 0,
            best_score: 0,
        }
    }

    /// The running view appears: start, then place the car and lay down the road.
    /// Starting first means the road reports land after the game-over reset.
    fn appear(&mut self, start: Command) {
        self.handle.send(start);
        for command in self.layout.player_appear() {
            self.handle.send(command);
        }
        self.reported_offset = Some(self.layout.player_start_offset());

        let road = Road::new();
        for command in self.layout.road_appear(road.segment_offsets(self.layout.max_height)) {
            self.handle.send(command);
        }
    }

    /// Pull session updates. Returns false once the driver should stop.
    fn sync(&mut self) -> bool {
        for update in self.handle.drain() {
            match update {
                SessionUpdate::Snapshot(snapshot) => self.snapshot = Some(snapshot),
                SessionUpdate::Event(event) => self.on_event(&event),
            }
        }
        self.runs_finished < self.settings.runs
    }

    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Started => {
                self.restarting = false;
                log::info!("Run {} started", self.runs_finished + 1);
            }
            GameEvent::LevelUp { level } => log::info!("Level {}", level),
            GameEvent::Collision(hit) => log::info!("Crashed into {:?}", hit.obstacle),
            GameEvent::GameOver {
                level,
                score,
                ticks,
            } => {
                self.runs_finished += 1;
                self.best_score = self.best_score.max(*score);
                log::info!(
                    "Run {} over: level {}, score {}, {} ticks",
                    self.runs_finished,
                    level,
                    score,
                    ticks
                );
            }
            GameEvent::ScoreUp { .. } | GameEvent::SpeedChanged { .. } => {}
        }
    }

    /// One presentation frame
    fn frame(&mut self, now: Instant) -> bool {
        let Some(snapshot) = self.snapshot.clone() else {
            return true;
        };

        match snapshot.status {
            GameStatus::Over => {
                if !self.restarting {
                    // Game-over screen tapped
                    self.restarting = true;
                    self.appear(Command::Restart);
                }
            }
            GameStatus::Running => {
                if self.settings.max_ticks > 0 && snapshot.tick_count >= self.settings.max_ticks {
                    log::info!(
                        "Survived {} ticks at level {} (score {})",
                        snapshot.tick_count,
                        snapshot.level,
                        snapshot.score
                    );
                    self.best_score = self.best_score.max(snapshot.score);
                    return false;
                }

                let elapsed = now.saturating_duration_since(snapshot.traffic_epoch);
                let traffic: Vec<Command> = self.layout.traffic_frame(elapsed).collect();
                let rects: Vec<_> = traffic
                    .iter()
                    .filter_map(|c| match c {
                        Command::ReportTrafficRect { rect, .. } => Some(*rect),
                        _ => None,
                    })
                    .collect();
                for command in traffic {
                    self.handle.send(command);
                }

                let offset = snapshot.player_offset;
                if self.reported_offset != Some(offset) {
                    self.handle
                        .send(Command::ReportPlayerRect(self.layout.player_rect(offset)));
                    self.reported_offset = Some(offset);
                }

                if let Some(autopilot) = self.autopilot.as_mut()
                    && let Some(command) = autopilot.steer(offset, &rects)
                {
                    self.handle.send(command);
                }
            }
        }
        true
    }

    fn run(mut self) -> u64 {
        self.appear(Command::Start);
        let period = self.settings.frame_period();

        loop {
            thread::sleep(period);
            if !self.sync() || !self.frame(Instant::now()) {
                break;
            }
        }
        self.best_score
    }
}

fn main() {
    env_logger::init();
    log::info!("Road Fighter (headless) starting...");

    let settings = std::env::args()
        .nth(1)
        .map(|path| Settings::load(Path::new(&path)))
        .unwrap_or_default();
    log::debug!("{:?}", settings);

    let (session, handle) = Session::new();
    let worker = session.spawn();

    let best = Driver::new(settings, handle).run();
    log::info!("Best score: {}", best);

    // Driver dropped its handle, which shuts the session down
    if worker.join().is_err() {
        log::error!("Session thread panicked");
    }
}
