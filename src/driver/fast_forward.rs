//! Fast-forward driver: play rounds back to back until told to stop.
//!
//! The stop signal is only checked between rounds. Stopping finishes the
//! round in flight, then the driver returns a final snapshot.
//!
//! ```
//! use std::sync::Arc;
//! use craps_engine::{EngineConfig, FastForward, Game, StopToken};
//!
//! let game = Arc::new(Game::seeded(3));
//! let driver = FastForward::new(Arc::clone(&game), EngineConfig::default()).unwrap();
//!
//! let token = StopToken::new();
//! let handle = driver.spawn(token.clone());
//! token.stop();
//!
//! let report = handle.join();
//! assert_eq!(report.final_snapshot.tally.total(), report.rounds_played);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::Receiver;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::EngineConfig;
use crate::engine::{Game, Snapshot, Tally};
use crate::error::Result;

/// Updates buffered for an observer before newer ones are dropped.
pub const UPDATE_CAPACITY: usize = 16;

/// Cooperative stop flag shared between a driver and whoever controls it.
#[derive(Clone, Debug, Default)]
pub struct StopToken {
    stopped: Arc<AtomicBool>,
}

impl StopToken {
    /// Create a token that has not been stopped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the driver to halt at the next round boundary.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Check if a stop was requested.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// Progress published while a drive runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveUpdate {
    /// Sent every `tally_interval` rounds.
    Tally(Tally),
    /// Sent every `rolls_interval` rounds.
    Snapshot(Snapshot),
}

/// Result of a finished drive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveReport {
    /// Rounds played by this drive.
    pub rounds_played: u64,
    /// Game state after the last round.
    pub final_snapshot: Snapshot,
}

/// Plays rounds on a shared `Game`.
#[derive(Clone, Debug)]
pub struct FastForward {
    game: Arc<Game>,
    config: EngineConfig,
}

impl FastForward {
    /// Create a driver, validating the update intervals.
    pub fn new(game: Arc<Game>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { game, config })
    }

    /// Play rounds on the current thread until `token` is stopped.
    pub fn run(&self, token: &StopToken, on_update: impl FnMut(DriveUpdate)) -> DriveReport {
        self.drive(|_| !token.is_stopped(), on_update)
    }

    /// Play exactly `rounds` rounds on the current thread.
    pub fn run_rounds(&self, rounds: u64, on_update: impl FnMut(DriveUpdate)) -> DriveReport {
        self.drive(|played| played < rounds, on_update)
    }

    /// Play rounds on a dedicated thread until `token` is stopped.
    ///
    /// Updates arrive on the handle's channel, which holds at most
    /// `UPDATE_CAPACITY` of them. When the observer falls behind, new updates
    /// are dropped. Dropping the handle stops the drive.
    pub fn spawn(self, token: StopToken) -> DriveHandle {
        let (tx, rx) = crossbeam_channel::bounded(UPDATE_CAPACITY);
        let thread_token = token.clone();

        let thread = std::thread::spawn(move || {
            self.run(&thread_token, |update| {
                let _ = tx.try_send(update);
            })
        });

        DriveHandle {
            token,
            updates: rx,
            thread: Some(thread),
        }
    }

    fn drive(
        &self,
        mut keep_going: impl FnMut(u64) -> bool,
        mut on_update: impl FnMut(DriveUpdate),
    ) -> DriveReport {
        info!(
            tally_interval = self.config.tally_interval,
            rolls_interval = self.config.rolls_interval,
            "fast-forward started"
        );

        let mut played = 0u64;
        while keep_going(played) {
            self.game.play_round();
            played += 1;

            if played % self.config.tally_interval == 0 {
                on_update(DriveUpdate::Tally(self.game.tally()));
            }
            if played % self.config.rolls_interval == 0 {
                on_update(DriveUpdate::Snapshot(self.game.snapshot()));
            }
        }

        let final_snapshot = self.game.snapshot();
        info!(
            rounds = played,
            wins = final_snapshot.tally.wins,
            losses = final_snapshot.tally.losses,
            "fast-forward stopped"
        );

        DriveReport {
            rounds_played: played,
            final_snapshot,
        }
    }
}

/// A drive running on its own thread.
///
/// Dropping the handle stops the drive at the next round boundary without
/// waiting for it.
#[derive(Debug)]
pub struct DriveHandle {
    token: StopToken,
    updates: Receiver<DriveUpdate>,
    thread: Option<JoinHandle<DriveReport>>,
}

impl DriveHandle {
    /// Progress updates from the drive.
    #[must_use]
    pub fn updates(&self) -> &Receiver<DriveUpdate> {
        &self.updates
    }

    /// Ask the drive to halt after the round in flight.
    pub fn stop(&self) {
        self.token.stop();
    }

    /// Check if the drive thread has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Stop the drive and wait for its report.
    ///
    /// # Panics
    ///
    /// Re-raises a panic from the drive thread.
    pub fn join(mut self) -> DriveReport {
        self.token.stop();
        let thread = self
            .thread
            .take()
            .unwrap_or_else(|| unreachable!("drive thread joined twice"));
        match thread.join() {
            Ok(report) => report,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

impl Drop for DriveHandle {
    fn drop(&mut self) {
        self.token.stop();
    }
}
