//! Win/loss tally and point-in-time snapshots of a game.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{DiceRoll, Phase, Point};

/// Cumulative win/loss counters.
///
/// Counters only ever increase, by exactly one per completed round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tally {
    /// Rounds won.
    pub wins: u64,
    /// Rounds lost.
    pub losses: u64,
}

impl Tally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed rounds.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.wins + self.losses
    }

    /// Count a finished round. Non-terminal phases are ignored.
    pub(crate) fn record(&mut self, outcome: Phase) {
        match outcome {
            Phase::Win => self.wins += 1,
            Phase::Loss => self.losses += 1,
            Phase::ComeOut | Phase::Point => {}
        }
    }
}

/// A consistent copy of a game at one instant.
///
/// Taken under the same lock that guards every mutation, so the roll log and
/// tally always belong together: if the last roll is terminal the tally
/// already counts that round, otherwise it does not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current phase.
    pub phase: Phase,

    /// Established point, if any.
    pub point: Option<Point>,

    /// Rolls of the current (or just finished) round, in order.
    pub rolls: Vector<DiceRoll>,

    /// Cumulative wins and losses.
    pub tally: Tally,

    /// Rounds begun over the game's lifetime.
    pub rounds_started: u64,
}

impl Snapshot {
    /// Most recent roll.
    #[must_use]
    pub fn last_roll(&self) -> Option<&DiceRoll> {
        self.rolls.last()
    }

    /// Check if the captured round has finished.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Terminal phase of the captured round, if it finished.
    #[must_use]
    pub fn outcome(&self) -> Option<Phase> {
        self.is_round_complete().then_some(self.phase)
    }

    /// Check the log/tally pairing holds.
    ///
    /// Always true for snapshots produced by a `Game`; useful for observers
    /// that receive snapshots over a channel.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.rounds_started == 0 {
            return self.rolls.is_empty() && self.tally.total() == 0;
        }
        let counted = self.tally.total();
        match self.last_roll() {
            Some(roll) if roll.phase().is_terminal() => counted == self.rounds_started,
            Some(_) => counted + 1 == self.rounds_started,
            // Empty log: a round just began, or the last one was reset away
            None => counted + 1 == self.rounds_started || counted == self.rounds_started,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dice;

    #[test]
    fn test_tally_record() {
        let mut tally = Tally::new();
        tally.record(Phase::Win);
        tally.record(Phase::Loss);
        tally.record(Phase::Win);
        tally.record(Phase::Point);

        assert_eq!(tally, Tally { wins: 2, losses: 1 });
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::default();
        assert!(snapshot.last_roll().is_none());
        assert!(!snapshot.is_round_complete());
        assert_eq!(snapshot.outcome(), None);
        assert!(snapshot.is_consistent());
    }

    #[test]
    fn test_consistency_check() {
        let win = DiceRoll::new(Dice::new(3, 4).unwrap(), Phase::Win);

        let finished = Snapshot {
            phase: Phase::Win,
            point: None,
            rolls: Vector::unit(win),
            tally: Tally { wins: 1, losses: 0 },
            rounds_started: 1,
        };
        assert!(finished.is_consistent());
        assert_eq!(finished.outcome(), Some(Phase::Win));

        let torn = Snapshot {
            tally: Tally::new(),
            ..finished.clone()
        };
        assert!(!torn.is_consistent());

        let just_reset = Snapshot {
            phase: Phase::ComeOut,
            rolls: Vector::new(),
            rounds_started: 2,
            ..finished
        };
        assert!(just_reset.is_consistent());
    }
}
