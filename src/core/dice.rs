//! Dice pairs and roll records.
//!
//! A `DiceRoll` is what the roll log stores: the two faces and the phase the
//! round moved to because of them. Records are immutable once created.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::error::{CrapsError, Result};

/// A pair of six-sided dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct Dice([u8; 2]);

impl Dice {
    /// Lowest face on a die.
    pub const MIN_FACE: u8 = 1;
    /// Highest face on a die.
    pub const MAX_FACE: u8 = 6;

    /// Create a dice pair, rejecting faces outside 1-6.
    pub fn new(first: u8, second: u8) -> Result<Self> {
        for face in [first, second] {
            if !(Self::MIN_FACE..=Self::MAX_FACE).contains(&face) {
                return Err(CrapsError::InvalidDie(face));
            }
        }
        Ok(Self([first, second]))
    }

    /// Build a pair the caller already drew in range.
    pub(crate) fn from_faces_unchecked(first: u8, second: u8) -> Self {
        debug_assert!((Self::MIN_FACE..=Self::MAX_FACE).contains(&first));
        debug_assert!((Self::MIN_FACE..=Self::MAX_FACE).contains(&second));
        Self([first, second])
    }

    /// Get both faces.
    #[must_use]
    pub const fn faces(self) -> [u8; 2] {
        self.0
    }

    /// Sum of both faces, always in 2-12.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.0[0] + self.0[1]
    }
}

impl TryFrom<[u8; 2]> for Dice {
    type Error = CrapsError;

    fn try_from(faces: [u8; 2]) -> Result<Self> {
        Self::new(faces[0], faces[1])
    }
}

impl From<Dice> for [u8; 2] {
    fn from(dice: Dice) -> [u8; 2] {
        dice.0
    }
}

/// One entry in a round's roll log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    dice: Dice,
    phase: Phase,
}

impl DiceRoll {
    /// Record a roll and the phase it produced.
    #[must_use]
    pub const fn new(dice: Dice, phase: Phase) -> Self {
        Self { dice, phase }
    }

    /// The dice that were rolled.
    #[must_use]
    pub const fn dice(&self) -> Dice {
        self.dice
    }

    /// Sum of the dice.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.dice.total()
    }

    /// Phase the round was in after this roll.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b] = self.dice.faces();
        write!(f, "[{}, {}] {}", a, b, self.phase)
    }
}
