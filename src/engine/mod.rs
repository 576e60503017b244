//! Round engine: plays rounds and hands out consistent snapshots.

pub mod game;
pub mod snapshot;

pub use game::Game;
pub use snapshot::{Snapshot, Tally};
