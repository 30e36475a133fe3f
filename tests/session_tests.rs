//! Game session integration tests.
//!
//! Covers both modes end to end: board generation, committing moves,
//! dry runs, terminal detection, and seeded replay.

use rust_2048::core::{
    CompressConfig, Direction, EngineError, GameRng, ModeKind, ScriptedRandom, SequentialIds,
    SessionConfig,
};
use rust_2048::grid::Grid;
use rust_2048::session::{Compress, GameMode, Session, Standard};

fn standard_session(values: &[u32], samples: Vec<f64>) -> Session<Standard, ScriptedRandom, SequentialIds> {
    let mut ids = SequentialIds::new();
    let grid = Grid::from_values(4, 4, values, &mut ids);
    Session::with_grid(Standard::new(), grid, ScriptedRandom::new(samples), ids)
}

// =============================================================================
// Standard Mode
// =============================================================================

#[test]
fn test_new_standard_board() {
    let session = Session::from_config(&SessionConfig::default()).unwrap();
    let grid = session.grid();

    assert_eq!(grid.len(), 16);
    assert_eq!(grid.free_cells().len(), 14);
    assert!(session.is_playable());
    assert!(session.score() >= 4 && session.score() <= 8);
}

#[test]
fn test_wall_move_does_not_insert() {
    #[rustfmt::skip]
    let mut session = standard_session(&[
        2, 4, 0, 0,
        4, 2, 0, 0,
        0, 0, 0, 0,
        0, 0, 0, 0,
    ], vec![0.0]);
    let before = session.grid().clone();

    let after = session.play(Direction::Left).unwrap();

    assert_eq!(after, before);
    assert_eq!(session.score(), 12);
    assert_eq!(session.moves(), 0);
}

#[test]
fn test_wall_move_draws_no_randomness() {
    let mut ids = SequentialIds::new();
    #[rustfmt::skip]
    let grid = Grid::from_values(4, 4, &[
        2, 4, 0, 0,
        4, 2, 0, 0,
        0, 0, 0, 0,
        0, 0, 0, 0,
    ], &mut ids);
    let mut rng = ScriptedRandom::constant(0.3);

    let after = Standard::new().play(&grid, Direction::Up, &mut rng, &mut ids).unwrap();

    assert_eq!(after, grid);
    assert_eq!(rng.draws(), 0);
}

#[test]
fn test_changing_move_inserts_one_tile() {
    #[rustfmt::skip]
    let mut session = standard_session(&[
        0, 0, 0, 2,
        0, 0, 0, 0,
        0, 0, 0, 0,
        0, 0, 0, 2,
    ], vec![0.0]);

    let after = session.play(Direction::Up).unwrap();

    #[rustfmt::skip]
    assert_eq!(after.values(), vec![
        2, 0, 0, 4,
        0, 0, 0, 0,
        0, 0, 0, 0,
        0, 0, 0, 0,
    ]);
    assert_eq!(session.moves(), 1);
}

#[test]
fn test_terminal_board() {
    #[rustfmt::skip]
    let session = standard_session(&[
        2, 4, 2, 4,
        4, 2, 4, 2,
        2, 4, 2, 4,
        4, 2, 4, 2,
    ], vec![0.0]);

    assert!(!session.is_playable());
}

#[test]
fn test_full_board_with_merge_is_playable() {
    #[rustfmt::skip]
    let session = standard_session(&[
        2, 4, 2, 4,
        4, 2, 4, 2,
        2, 4, 2, 4,
        4, 2, 4, 4,
    ], vec![0.0]);

    assert!(session.is_playable());
}

#[test]
fn test_dry_run_leaves_session_untouched() {
    #[rustfmt::skip]
    let mut session = standard_session(&[
        2, 2, 0, 0,
        0, 0, 0, 0,
        0, 0, 0, 0,
        0, 0, 0, 0,
    ], vec![0.0]);
    let before = session.grid().clone();

    let preview = session.dry_run(Direction::Right).unwrap();

    assert_eq!(preview.values()[3], 4);
    assert_eq!(session.grid(), &before);
    assert_eq!(session.score(), 4);
}

#[test]
fn test_score_never_decreases() {
    let mut session = Session::from_config(&SessionConfig::default().with_seed(2024)).unwrap();
    let mut last = session.score();

    for direction in Direction::ALL.iter().cycle().take(400) {
        if !session.is_playable() {
            break;
        }
        session.play(*direction).unwrap();
        assert!(session.score() >= last);
        last = session.score();
    }

    assert_eq!(session.score_tracker().regressions(), 0);
}

// =============================================================================
// Compress Mode
// =============================================================================

#[test]
fn test_compress_board_is_full() {
    let config = SessionConfig::default().with_mode(ModeKind::Compress);
    let session = Session::from_config(&config).unwrap();

    assert!(!session.grid().has_free_cell());
    assert!(session.is_playable());
}

#[test]
fn test_compress_never_totals_forbidden_sum() {
    for seed in 0..200 {
        let config = SessionConfig::default()
            .with_mode(ModeKind::Compress)
            .with_seed(seed);
        let session = Session::from_config(&config).unwrap();
        assert_ne!(session.score(), 512, "seed {seed}");
    }
}

#[test]
fn test_compress_conserves_total() {
    let config = SessionConfig::default().with_mode(ModeKind::Compress).with_seed(5);
    let mut session = Session::from_config(&config).unwrap();
    let total = session.score();

    for direction in Direction::ALL.iter().cycle().take(50) {
        session.play(*direction).unwrap();
        assert_eq!(session.score(), total);
    }
}

#[test]
fn test_compress_always_playable() {
    let mut ids = SequentialIds::new();
    let stuck = Grid::from_values(2, 2, &[2, 4, 4, 2], &mut ids);
    let session = Session::with_grid(Compress::default(), stuck, GameRng::new(1), ids);

    assert!(session.is_playable());
}

#[test]
fn test_compress_generation_error() {
    let mode = Compress::new(CompressConfig::default().with_max_attempts(3));

    // Every draw yields a 32, and sixteen 32s total 512.
    let result = Session::new(mode, ScriptedRandom::constant(0.96), SequentialIds::new());

    assert!(matches!(result, Err(EngineError::Generation { attempts: 3 })));
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_game() {
    let config = SessionConfig::default().with_seed(31337);
    let mut a = Session::from_config(&config).unwrap();
    let mut b = Session::from_config(&config).unwrap();

    for direction in Direction::ALL.iter().cycle().take(60) {
        let ga = a.play(*direction).unwrap();
        let gb = b.play(*direction).unwrap();
        assert_eq!(ga, gb);
        assert_eq!(ga.cells(), gb.cells());
    }
}

#[test]
fn test_reset_is_deterministic_under_reseed() {
    let mut session = Session::from_config(&SessionConfig::default()).unwrap();
    session.reseed(8).unwrap();
    let first = session.grid().clone();

    session.play(Direction::Down).unwrap();
    session.reseed(8).unwrap();

    assert_eq!(session.grid(), &first);
    assert_eq!(session.moves(), 0);
}
