//! # craps-engine
//!
//! A craps round engine: come-out roll, point rolls, win or loss.
//!
//! ## Design Principles
//!
//! 1. **Rules in one place**: `rules::transition` is a pure function of
//!    (phase, total, point). `Phase` is data only.
//!
//! 2. **Snapshots, not references**: Observers get value copies of the roll
//!    log and tally taken under one lock, never a view into live state.
//!
//! 3. **Cooperative stopping**: Fast-forward drives check a `StopToken`
//!    between rounds, never mid-round.
//!
//! ## Modules
//!
//! - `core`: Phases, points, dice, dice sources, configuration
//! - `rules`: The craps state machine
//! - `engine`: `Game` (round engine), `Tally`, `Snapshot`
//! - `driver`: Fast-forward driver and stop token
//!
//! ## Example
//!
//! ```
//! use craps_engine::Game;
//!
//! let game = Game::seeded(42);
//! let outcome = game.play_round();
//! assert!(outcome.is_terminal());
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.last_roll().map(|r| r.phase()), Some(outcome));
//! assert_eq!(snapshot.tally.total(), 1);
//! ```

pub mod core;
pub mod driver;
pub mod engine;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Dice, DiceRng, DiceRngState, DiceRoll, DiceSource, EngineConfig, Phase, Point, ScriptedDice,
};

pub use crate::driver::{
    DriveHandle, DriveReport, DriveUpdate, FastForward, StopToken, UPDATE_CAPACITY,
};

pub use crate::engine::{Game, Snapshot, Tally};

pub use crate::error::{CrapsError, Result};

pub use crate::rules::{transition, try_transition};
