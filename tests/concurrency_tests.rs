//! Concurrent driving and snapshotting.
//!
//! One thread plays rounds while others read snapshots. Every snapshot must
//! pair the roll log with the tally of the same round.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use craps_engine::{DriveUpdate, EngineConfig, FastForward, Game, Phase, StopToken};

// =============================================================================
// Snapshot Consistency
// =============================================================================

/// Snapshots taken mid-drive are never torn across the log/tally boundary.
#[test]
fn test_snapshots_during_drive_are_consistent() {
    let game = Arc::new(Game::seeded(42));
    let token = StopToken::new();

    let driver = {
        let game = Arc::clone(&game);
        let token = token.clone();
        thread::spawn(move || {
            let mut rounds = 0u64;
            while !token.is_stopped() && rounds < 20_000 {
                game.play_round();
                rounds += 1;
            }
            rounds
        })
    };

    let mut last_total = 0;
    for _ in 0..5_000 {
        let snapshot = game.snapshot();

        assert!(snapshot.is_consistent(), "torn snapshot: {:?}", snapshot);
        assert!(snapshot.tally.total() >= last_total, "tally went backwards");
        last_total = snapshot.tally.total();

        for (i, roll) in snapshot.rolls.iter().enumerate() {
            let is_last = i + 1 == snapshot.rolls.len();
            assert!(
                is_last || !roll.phase().is_terminal(),
                "terminal roll in the middle of a round: {:?}",
                snapshot.rolls
            );
        }
    }

    token.stop();
    let rounds = driver.join().unwrap();

    let tally = game.tally();
    assert_eq!(tally.total(), rounds);
}

/// Rounds from two threads never interleave their rolls.
#[test]
fn test_concurrent_play_rounds_are_serialized() {
    let game = Arc::new(Game::seeded(5));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let game = Arc::clone(&game);
            thread::spawn(move || {
                for _ in 0..500 {
                    let outcome = game.play_round();
                    assert!(outcome.is_terminal());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = game.snapshot();
    assert_eq!(snapshot.tally.total(), 2_000);
    assert_eq!(snapshot.rounds_started, 2_000);
    assert!(snapshot.is_round_complete());
    assert!(snapshot.is_consistent());
}

// =============================================================================
// Fast-forward Driver
// =============================================================================

/// Stopping a spawned drive finishes the round in flight and reports it.
#[test]
fn test_spawned_drive_stops_at_round_boundary() {
    let game = Arc::new(Game::seeded(8));
    let config = EngineConfig::new().with_tally_interval(100).with_rolls_interval(500);
    let driver = FastForward::new(Arc::clone(&game), config).unwrap();

    let handle = driver.spawn(StopToken::new());

    // Wait for some progress before stopping
    let mut seen_snapshot = false;
    for update in handle.updates().iter() {
        match update {
            DriveUpdate::Tally(tally) => assert_eq!(tally.total() % 100, 0),
            DriveUpdate::Snapshot(snapshot) => {
                assert!(snapshot.is_consistent());
                seen_snapshot = true;
                break;
            }
        }
    }
    assert!(seen_snapshot);

    handle.stop();
    let report = handle.join();

    assert!(report.rounds_played >= 500);
    assert_eq!(report.final_snapshot.tally.total(), report.rounds_played);
    assert!(matches!(
        report.final_snapshot.outcome(),
        Some(Phase::Win) | Some(Phase::Loss)
    ));
    assert_eq!(report.final_snapshot, game.snapshot());
}

/// Observers can snapshot while a spawned drive runs.
#[test]
fn test_observer_alongside_spawned_drive() {
    let game = Arc::new(Game::seeded(13));
    let driver = FastForward::new(Arc::clone(&game), EngineConfig::default()).unwrap();
    let token = StopToken::new();
    let handle = driver.spawn(token.clone());

    while game.tally().total() < 1_000 {
        let snapshot = game.snapshot();
        assert!(snapshot.is_consistent());
    }

    token.stop();
    let report = handle.join();
    assert!(report.rounds_played >= 1_000);
    assert!(report.final_snapshot.is_consistent());
}

/// Dropping the handle stops the drive thread.
#[test]
fn test_dropped_handle_stops_drive() {
    let game = Arc::new(Game::seeded(17));
    let driver = FastForward::new(Arc::clone(&game), EngineConfig::default()).unwrap();

    let handle = driver.spawn(StopToken::new());
    while game.tally().total() < 100 {
        thread::yield_now();
    }
    drop(handle);

    // Let the round in flight finish
    thread::sleep(Duration::from_millis(50));
    let before = game.tally();
    thread::sleep(Duration::from_millis(200));
    let after = game.tally();

    assert_eq!(before, after, "drive kept playing after its handle was dropped");
    assert!(game.snapshot().is_round_complete());
}

/// `is_finished` reports the thread exit after a stop.
#[test]
fn test_handle_reports_finished() {
    let game = Arc::new(Game::seeded(19));
    let driver = FastForward::new(Arc::clone(&game), EngineConfig::default()).unwrap();
    let token = StopToken::new();

    let handle = driver.spawn(token.clone());
    while game.tally().total() < 10 {
        thread::yield_now();
    }
    assert!(!token.is_stopped());

    handle.stop();
    assert!(token.is_stopped());
    while !handle.is_finished() {
        thread::sleep(Duration::from_millis(1));
    }

    let report = handle.join();
    assert_eq!(report.final_snapshot, game.snapshot());
}
