//! Round phases and the established point.
//!
//! `Phase` is plain data. The rules that move a round between phases live in
//! [`crate::rules::transition`], not on the enum.

use serde::{Deserialize, Serialize};

use crate::error::{CrapsError, Result};

/// Stage of a single craps round.
///
/// Every round starts in `ComeOut`. `Point` is only reachable from `ComeOut`
/// (and stays there until the round resolves). `Win` and `Loss` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// First roll of a round.
    #[default]
    ComeOut,
    /// The shooter made the point, or rolled a natural on come-out.
    Win,
    /// Craps on come-out, or seven-out during the point phase.
    Loss,
    /// A point is established; rolling until the point or a seven.
    Point,
}

impl Phase {
    /// All phases, in declaration order.
    pub const ALL: [Phase; 4] = [Phase::ComeOut, Phase::Win, Phase::Loss, Phase::Point];

    /// Check if the round is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Win | Phase::Loss)
    }

    /// Human-readable name (for debugging/display).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::ComeOut => "ComeOut",
            Phase::Win => "Win",
            Phase::Loss => "Loss",
            Phase::Point => "Point",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An established point: one of 4, 5, 6, 8, 9 or 10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Point(u8);

impl Point {
    /// Every total that can become a point.
    pub const VALUES: [u8; 6] = [4, 5, 6, 8, 9, 10];

    /// Create a point, rejecting totals that cannot be one.
    pub fn new(total: u8) -> Result<Self> {
        if Self::VALUES.contains(&total) {
            Ok(Self(total))
        } else {
            Err(CrapsError::InvalidPoint(total))
        }
    }

    /// Get the raw total.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Point {
    type Error = CrapsError;

    fn try_from(total: u8) -> Result<Self> {
        Self::new(total)
    }
}

impl From<Point> for u8 {
    fn from(point: Point) -> u8 {
        point.0
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
