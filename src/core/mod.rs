//! Core types: phases, dice, dice sources, configuration.
//!
//! Everything here is plain data or a source of dice. Game rules live in
//! `rules`, round bookkeeping in `engine`.

pub mod config;
pub mod dice;
pub mod phase;
pub mod rng;

pub use config::EngineConfig;
pub use dice::{Dice, DiceRoll};
pub use phase::{Phase, Point};
pub use rng::{DiceRng, DiceRngState, DiceSource, ScriptedDice};
