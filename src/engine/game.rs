//! The round engine.
//!
//! A `Game` plays whole rounds of craps and keeps the roll log of the most
//! recent round plus a lifetime win/loss tally. It is `Sync`: one thread may
//! drive rounds while others take snapshots.
//!
//! ## Locking
//!
//! - `table` guards phase, point, roll log, tally and round counter. Every
//!   write and every snapshot takes it, and it is never held while dice are
//!   thrown.
//! - `dice` guards the dice source and is held for a whole round, so rounds
//!   (and resets) from different threads never interleave.
//!
//! The roll that ends a round and the tally increment for it are written in
//! one `table` critical section.

use im::Vector;
use parking_lot::Mutex;
use tracing::{debug, trace};

use super::snapshot::{Snapshot, Tally};
use crate::core::{DiceRng, DiceRoll, DiceSource, EngineConfig, Phase, Point};
use crate::rules::transition;

/// Mutable round state plus the lifetime tally.
#[derive(Debug, Default)]
struct Table {
    phase: Phase,
    point: Option<Point>,
    rolls: Vector<DiceRoll>,
    tally: Tally,
    rounds_started: u64,
}

impl Table {
    fn reset(&mut self) {
        self.phase = Phase::ComeOut;
        self.point = None;
        self.rolls.clear();
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            point: self.point,
            rolls: self.rolls.clone(),
            tally: self.tally,
            rounds_started: self.rounds_started,
        }
    }
}

/// A craps game: round state, roll log, tally and a dice source.
pub struct Game {
    table: Mutex<Table>,
    dice: Mutex<Box<dyn DiceSource + Send>>,
}

impl Game {
    /// Create a game that throws dice from `source`.
    pub fn new(source: impl DiceSource + Send + 'static) -> Self {
        Self {
            table: Mutex::new(Table::default()),
            dice: Mutex::new(Box::new(source)),
        }
    }

    /// Create a game with deterministic dice.
    pub fn seeded(seed: u64) -> Self {
        Self::new(DiceRng::new(seed))
    }

    /// Create a game with dice seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(DiceRng::from_entropy())
    }

    /// Create a game from configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Start a fresh round: come-out phase, no point, empty roll log.
    ///
    /// The tally is left alone. Waits for any round in progress to finish.
    pub fn reset(&self) {
        let _dice = self.dice.lock();
        self.table.lock().reset();
    }

    /// Play one full round and return how it ended (`Win` or `Loss`).
    ///
    /// Resets first, then rolls until the round resolves. Exactly one tally
    /// counter is incremented.
    pub fn play_round(&self) -> Phase {
        let mut dice = self.dice.lock();

        let round = {
            let mut table = self.table.lock();
            table.reset();
            table.rounds_started += 1;
            table.rounds_started
        };

        let mut phase = Phase::ComeOut;
        let mut point = None;

        loop {
            let thrown = dice.roll();
            let total = thrown.total();
            let next = transition(phase, total, point);

            if phase == Phase::ComeOut && next == Phase::Point {
                point = Point::new(total).ok();
                debug_assert!(point.is_some(), "come-out {} cannot be a point", total);
            }

            {
                let mut table = self.table.lock();
                table.phase = next;
                table.point = point;
                table.rolls.push_back(DiceRoll::new(thrown, next));
                if next.is_terminal() {
                    table.tally.record(next);
                }
            }

            trace!(round, total, from = %phase, to = %next, "roll");
            phase = next;

            if phase.is_terminal() {
                break;
            }
        }

        debug!(round, outcome = %phase, "round complete");
        phase
    }

    /// Take a consistent copy of the game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.table.lock().snapshot()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.table.lock().phase
    }

    /// Established point of the current round, if any.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        self.table.lock().point
    }

    /// Copy of the current round's roll log.
    #[must_use]
    pub fn rolls(&self) -> Vector<DiceRoll> {
        self.table.lock().rolls.clone()
    }

    /// Copy of the win/loss tally.
    #[must_use]
    pub fn tally(&self) -> Tally {
        self.table.lock().tally
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("table", &*self.table.lock())
            .finish_non_exhaustive()
    }
}
