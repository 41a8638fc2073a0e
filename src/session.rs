//! Game session: one queue, one owner, one timer
//!
//! Every mutation (input, geometry reports, timer ticks) arrives as a
//! `Command` on a single channel and is applied in arrival order by the
//! thread that owns the `GameState`. Ticks therefore see exactly the geometry
//! reported before they were queued.
//!
//! ```text
//! presentation ──Command──┐
//!                         ├──> Session (owns GameState) ──SessionUpdate──> presentation
//! TickSource  ──Tick(gen)─┘
//! ```

use std::ops::ControlFlow;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::consts::TICK_INTERVAL;
use crate::platform::{Command, TickSource};
use crate::sim::{self, GameEvent, GameSnapshot, GameState};

/// What the session publishes back to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    Event(GameEvent),
    Snapshot(GameSnapshot),
}

/// Owns the game state and the tick source
pub struct Session {
    state: GameState,
    ticks: TickSource,
    /// Bumped on every start; ticks from older generations are dropped
    generation: u64,
    commands: Receiver<Command>,
    /// Handed to the tick source so ticks share the command queue
    sender: Sender<Command>,
    updates: Sender<SessionUpdate>,
}

/// Presentation-side end of a session
///
/// Dropping the handle shuts the session down.
pub struct SessionHandle {
    commands: Sender<Command>,
    updates: Receiver<SessionUpdate>,
}

impl SessionHandle {
    /// Queue a command. Returns false if the session has stopped.
    pub fn send(&self, command: Command) -> bool {
        self.commands.send(command).is_ok()
    }

    pub fn updates(&self) -> &Receiver<SessionUpdate> {
        &self.updates
    }

    /// Everything published since the last drain
    pub fn drain(&self) -> Vec<SessionUpdate> {
        self.updates.try_iter().collect()
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        let _ = self.commands.send(Command::Shutdown);
    }
}

impl Session {
    /// New session ticking at the fixed game rate
    pub fn new() -> (Self, SessionHandle) {
        Self::with_tick_interval(TICK_INTERVAL)
    }

    pub(crate) fn with_tick_interval(period: Duration) -> (Self, SessionHandle) {
        let (sender, commands) = unbounded();
        let (updates, updates_rx) = unbounded();

        let session = Self {
            state: GameState::new(),
            ticks: TickSource::new(period),
            generation: 0,
            commands,
            sender: sender.clone(),
            updates,
        };
        let handle = SessionHandle {
            commands: sender,
            updates: updates_rx,
        };
        (session, handle)
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a tick source is running
    pub fn is_ticking(&self) -> bool {
        self.ticks.is_running()
    }

    /// Process commands until shutdown
    pub fn run(mut self) {
        log::info!("Session running (tick every {:?})", self.ticks.period());

        while let Ok(command) = self.commands.recv() {
            if self.handle(command).is_break() {
                break;
            }
        }

        self.ticks.cancel();
        log::info!("Session stopped");
    }

    /// Run on a dedicated thread
    pub fn spawn(self) -> thread::JoinHandle<()> {
        thread::spawn(move || self.run())
    }

    /// Apply one command
    pub fn handle(&mut self, command: Command) -> ControlFlow<()> {
        if command.is_geometry() {
            log::trace!("{:?}", command);
        } else if !matches!(command, Command::Tick { .. }) {
            log::debug!("{:?}", command);
        }

        // Road and traffic were reset by game over; reports still in flight
        // from the finished run must not leak into the next one
        if !self.state.is_running()
            && matches!(
                command,
                Command::SetRoadOffset(_)
                    | Command::ReportRoadRect(_)
                    | Command::ReportTrafficRect { .. }
            )
        {
            log::trace!("Dropping geometry while the game is over");
            return ControlFlow::Continue(());
        }

        match command {
            Command::Start | Command::Restart => self.start(),
            Command::Left => {
                self.state.controls.left();
                self.publish_snapshot();
            }
            Command::Right => {
                self.state.controls.right();
                self.publish_snapshot();
            }
            Command::SetRoadOffset(offset) => self.state.road.set_offset(offset),
            Command::ReportRoadRect(rect) => self.state.road.report_rect(rect),
            Command::ReportTrafficRect { id, rect } => self.state.traffic.report_rect(id, rect),
            Command::SetPlayerOffset(offset) => {
                self.state.player.set_horizontal_offset(offset);
                self.publish_snapshot();
            }
            Command::ReportPlayerRect(rect) => self.state.player.report_rect(rect),
            Command::Tick { generation } => self.on_tick(generation),
            Command::Shutdown => {
                self.ticks.cancel();
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }

    fn start(&mut self) {
        // Already ticking: a second start must not add a second timer
        if self.ticks.is_running() && self.state.is_running() {
            log::debug!("Start ignored: run {} in progress", self.generation);
            return;
        }

        self.generation += 1;
        let events = sim::start(&mut self.state);
        self.ticks.start(self.generation, self.sender.clone());
        self.publish(events);
    }

    fn on_tick(&mut self, generation: u64) {
        if self.ticks.generation() != Some(generation) {
            log::trace!("Dropping stale tick from run {}", generation);
            return;
        }

        let events = sim::step(&mut self.state);
        if !self.state.is_running() {
            self.ticks.cancel();
        }
        self.publish(events);
    }

    fn publish(&self, events: Vec<GameEvent>) {
        for event in events {
            let _ = self.updates.send(SessionUpdate::Event(event));
        }
        self.publish_snapshot();
    }

    fn publish_snapshot(&self) {
        let _ = self
            .updates
            .send(SessionUpdate::Snapshot(self.state.snapshot()));
    }
}
