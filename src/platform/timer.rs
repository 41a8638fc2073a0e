//! Cancelable fixed-interval tick source
//!
//! A background thread that sends `Command::Tick` into the session queue every
//! period until cancelled. At most one such thread exists per `TickSource`:
//! starting again cancels (and joins) the previous one first.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Sender, select};

use super::input::Command;

struct Running {
    generation: u64,
    /// Dropping this wakes the timer thread and stops it
    stop: Sender<()>,
    handle: thread::JoinHandle<()>,
}

/// Periodic tick source with an explicit cancel handle
pub struct TickSource {
    period: Duration,
    running: Option<Running>,
}

impl TickSource {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            running: None,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Generation of the running timer, if any
    pub fn generation(&self) -> Option<u64> {
        self.running.as_ref().map(|r| r.generation)
    }

    /// Start ticking into `sink`, tagging every tick with `generation`.
    ///
    /// Any previous timer is cancelled first, so two timers never run at once.
    pub fn start(&mut self, generation: u64, sink: Sender<Command>) {
        self.cancel();

        let (stop, stopped) = crossbeam_channel::bounded::<()>(0);
        let ticker = crossbeam_channel::tick(self.period);
        let period = self.period;

        let handle = thread::spawn(move || {
            log::debug!("Tick source {} running every {:?}", generation, period);
            loop {
                select! {
                    recv(stopped) -> _ => break,
                    recv(ticker) -> _ => {
                        if sink.send(Command::Tick { generation }).is_err() {
                            // Session is gone
                            break;
                        }
                    }
                }
            }
            log::debug!("Tick source {} stopped", generation);
        });

        self.running = Some(Running {
            generation,
            stop,
            handle,
        });
    }

    /// Stop the running timer and wait for its thread.
    ///
    /// Safe to call when nothing is running. Returns true if a timer was stopped.
    pub fn cancel(&mut self) -> bool {
        let Some(running) = self.running.take() else {
            return false;
        };

        drop(running.stop);
        if running.handle.join().is_err() {
            log::error!("Tick source {} panicked", running.generation);
        }
        true
    }
}

impl Drop for TickSource {
    fn drop(&mut self) {
        self.cancel();
    }
}
