//! Dice sources: seeded RNG for play, scripted faces for replays.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical sequence of rolls
//! - **Entropy-seeded**: `DiceRng::from_entropy` for live play
//! - **Checkpointable**: O(1) state capture and restore via `DiceRngState`
//!
//! ```
//! use craps_engine::core::{DiceRng, DiceSource};
//!
//! let mut a = DiceRng::new(42);
//! let mut b = DiceRng::new(42);
//! assert_eq!(a.roll(), b.roll());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::dice::Dice;
use crate::error::Result;

/// Anything that can throw a pair of dice.
///
/// Implementations must return faces in 1-6; `Dice` enforces that at
/// construction so a source cannot hand the engine an impossible total.
pub trait DiceSource {
    /// Throw both dice once.
    fn roll(&mut self) -> Dice;
}

/// Uniform dice backed by ChaCha8.
///
/// Each roll makes two independent draws in 1-6. ChaCha8 is fast while still
/// giving cryptographic-quality output.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The drawn seed is kept so `state()` still works.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a single die face.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(Dice::MIN_FACE..=Dice::MAX_FACE)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for DiceRng {
    fn roll(&mut self) -> Dice {
        let first = self.roll_die();
        let second = self.roll_die();
        Dice::from_faces_unchecked(first, second)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) no matter how many
/// dice have been thrown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of dice.
///
/// Used for deterministic scenarios and replaying a recorded round. Panics
/// when asked for more rolls than it holds, since a round that outlives its
/// script is a bug in the caller.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<Dice>,
}

impl ScriptedDice {
    /// Create a script from dice pairs.
    pub fn new(rolls: impl IntoIterator<Item = Dice>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Create a script from raw face pairs, validating each.
    pub fn from_faces(faces: &[(u8, u8)]) -> Result<Self> {
        let rolls = faces
            .iter()
            .map(|&(a, b)| Dice::new(a, b))
            .collect::<Result<VecDeque<_>>>()?;
        Ok(Self { rolls })
    }

    /// Number of rolls left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> Dice {
        self.rolls
            .pop_front()
            .unwrap_or_else(|| panic!("scripted dice exhausted"))
    }
}

impl<S: DiceSource + ?Sized> DiceSource for Box<S> {
    fn roll(&mut self) -> Dice {
        (**self).roll()
    }
}
