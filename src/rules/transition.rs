//! The craps state machine.
//!
//! One function maps (phase, dice total, established point) to the next
//! phase. It is the only place the rules of the game are written down.

use crate::core::{Phase, Point};
use crate::error::{CrapsError, Result};

/// Smallest total two dice can show.
pub const MIN_TOTAL: u8 = 2;
/// Largest total two dice can show.
pub const MAX_TOTAL: u8 = 12;
/// Sevens win on come-out and lose once a point is set.
pub const SEVEN: u8 = 7;

/// Compute the phase after a roll.
///
/// - `ComeOut`: 2, 3 or 12 lose; 7 or 11 win; anything else sets a point
///   (the caller records `total` as the point).
/// - `Point`: the point wins, 7 loses, anything else keeps rolling.
/// - `Win`/`Loss`: unchanged.
///
/// # Panics
///
/// Panics if `total` is outside 2-12, or if `phase` is `Point` and no point
/// is given. Both mean the caller is broken; use [`try_transition`] for
/// totals that come from outside the engine.
#[must_use]
pub fn transition(phase: Phase, total: u8, point: Option<Point>) -> Phase {
    match try_transition(phase, total, point) {
        Ok(next) => next,
        Err(err) => panic!("illegal transition from {}: {}", phase, err),
    }
}

/// Checked form of [`transition`].
pub fn try_transition(phase: Phase, total: u8, point: Option<Point>) -> Result<Phase> {
    if !(MIN_TOTAL..=MAX_TOTAL).contains(&total) {
        return Err(CrapsError::InvalidTotal(total));
    }

    let next = match phase {
        Phase::ComeOut => match total {
            2 | 3 | 12 => Phase::Loss,
            7 | 11 => Phase::Win,
            _ => Phase::Point,
        },
        Phase::Point => {
            let point = point.ok_or(CrapsError::MissingPoint)?;
            if total == point.value() {
                Phase::Win
            } else if total == SEVEN {
                Phase::Loss
            } else {
                Phase::Point
            }
        }
        Phase::Win | Phase::Loss => phase,
    };

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(total: u8) -> Option<Point> {
        Some(Point::new(total).unwrap())
    }

    #[test]
    fn test_come_out_craps_loses() {
        for total in [2, 3, 12] {
            assert_eq!(transition(Phase::ComeOut, total, None), Phase::Loss);
        }
    }

    #[test]
    fn test_come_out_natural_wins() {
        for total in [7, 11] {
            assert_eq!(transition(Phase::ComeOut, total, None), Phase::Win);
        }
    }

    #[test]
    fn test_come_out_sets_point() {
        for total in Point::VALUES {
            assert_eq!(transition(Phase::ComeOut, total, None), Phase::Point);
        }
    }

    #[test]
    fn test_point_continues() {
        for p in Point::VALUES {
            for total in MIN_TOTAL..=MAX_TOTAL {
                if total != SEVEN && total != p {
                    assert_eq!(transition(Phase::Point, total, point(p)), Phase::Point);
                }
            }
        }
    }

    #[test]
    fn test_point_made_and_seven_out() {
        assert_eq!(transition(Phase::Point, 6, point(6)), Phase::Win);
        assert_eq!(transition(Phase::Point, 7, point(6)), Phase::Loss);

        // Come-out craps numbers mean nothing once a point is set
        for total in [2, 3, 12] {
            assert_ne!(transition(Phase::Point, total, point(6)), Phase::Loss);
        }
    }

    #[test]
    fn test_terminal_is_identity() {
        for phase in Phase::ALL.into_iter().filter(|p| p.is_terminal()) {
            for total in MIN_TOTAL..=MAX_TOTAL {
                assert_eq!(transition(phase, total, None), phase);
                assert_eq!(transition(phase, total, point(8)), phase);
            }
        }
    }

    #[test]
    fn test_try_transition_rejects_bad_input() {
        assert_eq!(
            try_transition(Phase::ComeOut, 1, None),
            Err(CrapsError::InvalidTotal(1))
        );
        assert_eq!(
            try_transition(Phase::ComeOut, 13, None),
            Err(CrapsError::InvalidTotal(13))
        );
        assert_eq!(
            try_transition(Phase::Point, 8, None),
            Err(CrapsError::MissingPoint)
        );
    }

    #[test]
    #[should_panic(expected = "invalid dice total: 13")]
    fn test_transition_panics_on_bad_total() {
        let _ = transition(Phase::ComeOut, 13, None);
    }
}
