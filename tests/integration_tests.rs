//! Integration tests for color-tiles
//!
//! Fixed layouts bypass the generator so scenarios are exact; seeded games
//! exercise the engine on random boards.

use color_tiles::error::GameError;
use color_tiles::game::{ClearResult, Game, TerminalWatch};
use color_tiles::grid::{Cell, Grid, tiles_per_color};

// =============================================================================
// Helper functions
// =============================================================================

/// Start a game on a fixed layout.
fn setup(layout: &str, num_colors: usize) -> Game {
    Game::from_grid(Grid::parse(layout, num_colors).expect("valid layout"))
}

/// Start a seeded random game.
fn seeded(height: usize, width: usize, num_colors: usize, seed: u64) -> Game {
    Game::with_rng(height, width, num_colors, fastrand::Rng::with_seed(seed)).unwrap()
}

/// Play random legal moves until none remain, returning how many were made.
fn play_out(game: &mut Game, rng: &mut fastrand::Rng) -> usize {
    let mut moves = 0;
    loop {
        let hints = game.hints();
        if hints.is_empty() {
            return moves;
        }
        let pt = hints[rng.usize(..hints.len())];
        assert!(matches!(game.select(pt), Ok(ClearResult::Cleared(_))));
        moves += 1;
    }
}

// =============================================================================
// Generation
// =============================================================================

#[test]
fn test_new_game_color_multiset() {
    for (h, w, c, seed) in [(15, 23, 10, 1), (4, 4, 2, 2), (7, 3, 5, 3), (1, 10, 3, 4)] {
        let game = seeded(h, w, c, seed);
        let cells = game.cells();
        assert_eq!(cells.len(), h * w);

        let amt = tiles_per_color(h * w, c);
        for color in 0..c {
            let n = cells.iter().filter(|&&x| x == Cell::Color(color)).count();
            assert_eq!(n, amt, "{h}x{w}/{c}: color {color}");
        }
        let blanks = cells.iter().filter(|x| x.is_blank()).count();
        assert_eq!(blanks, h * w - amt * c);
    }
}

#[test]
fn test_new_game_rejects_invalid_configuration() {
    assert!(matches!(
        Game::new(15, 23, 0),
        Err(GameError::InvalidConfiguration { .. })
    ));
    assert!(matches!(
        Game::new(0, 23, 10),
        Err(GameError::InvalidConfiguration { .. })
    ));
    assert!(matches!(
        Game::new(15, 0, 10),
        Err(GameError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_same_seed_same_game() {
    let a = seeded(8, 9, 4, 99);
    let b = seeded(8, 9, 4, 99);
    assert_eq!(a.cells(), b.cells());
}

// =============================================================================
// Worked scenario: 1x4 grid [0, _, _, 0]
// =============================================================================

#[test]
fn test_scenario_clear_and_undo() {
    let mut game = setup("0 . . 0", 2);
    let original = game.cells();

    assert_eq!(game.preview(1).unwrap(), vec![0, 3]);
    assert_eq!(game.select(1).unwrap(), ClearResult::Cleared(vec![0, 3]));
    assert!(game.cells().iter().all(|c| c.is_blank()));
    assert_eq!(game.history().entries(), &[vec![0, 3]]);
    assert_eq!(game.history().cursor(), Some(0));
    assert!(!game.has_legal_move());

    assert!(game.undo());
    assert_eq!(game.history().cursor(), None);
    assert_eq!(game.cells(), original);
}

#[test]
fn test_scenario_symmetric_select() {
    let mut game = setup("0 . . 0", 2);
    assert_eq!(game.select(2).unwrap(), ClearResult::Cleared(vec![0, 3]));
}

#[test]
fn test_select_on_tile_is_noop() {
    let mut game = setup("0 . . 0", 2);
    assert!(game.preview(0).unwrap().is_empty());
    assert_eq!(game.select(0).unwrap(), ClearResult::NoMove);
    assert!(game.history().is_empty());
}

#[test]
fn test_select_out_of_bounds() {
    let mut game = setup("0 . . 0", 2);
    assert_eq!(
        game.select(4),
        Err(GameError::IndexOutOfBounds { point: 4, len: 4 })
    );
}

// =============================================================================
// History
// =============================================================================

#[test]
fn test_undo_redo_replay() {
    let mut game = seeded(10, 12, 4, 5);
    let mut rng = fastrand::Rng::with_seed(5);
    let moves = play_out(&mut game, &mut rng);
    assert!(moves > 0);
    let end = game.cells();

    let mut states = vec![end.clone()];
    while game.undo() {
        states.push(game.cells());
    }
    assert_eq!(states.len(), moves + 1);
    assert_eq!(game.cells(), game.grid().cells());

    for expected in states.iter().rev().skip(1) {
        assert!(game.redo());
        assert_eq!(&game.cells(), expected);
    }
    assert!(!game.redo());
    assert_eq!(game.cells(), end);
}

#[test]
fn test_commit_after_undo_discards_redo() {
    let mut game = setup(
        "0 . 0
         1 . 1",
        2,
    );
    game.select(1).unwrap();
    game.select(4).unwrap();
    assert!(game.undo());
    assert!(game.undo());
    game.select(4).unwrap();
    assert_eq!(game.history().entries(), &[vec![3, 5]]);
    assert!(!game.redo());
}

#[test]
fn test_boundaries_are_noops() {
    let mut game = setup("0 . . 0", 1);
    let before = game.cells();
    assert!(!game.undo());
    assert!(!game.redo());
    assert_eq!(game.cells(), before);
}

// =============================================================================
// Terminal detection
// =============================================================================

#[test]
fn test_has_legal_move_matches_brute_force() {
    for seed in 0..20 {
        let mut game = seeded(6, 7, 3, seed);
        let mut rng = fastrand::Rng::with_seed(seed);
        loop {
            let brute = (0..game.grid().len()).any(|pt| {
                game.cells()[pt].is_blank() && {
                    let mut probe = game.clone();
                    matches!(probe.select(pt), Ok(ClearResult::Cleared(_)))
                }
            });
            assert_eq!(game.has_legal_move(), brute);
            if !brute {
                break;
            }
            let hints = game.hints();
            game.select(hints[rng.usize(..hints.len())]).unwrap();
        }
    }
}

#[test]
fn test_clear_sets_are_never_single() {
    for seed in 0..10 {
        let mut game = seeded(9, 9, 5, seed);
        let mut rng = fastrand::Rng::with_seed(seed + 100);
        while !game.hints().is_empty() {
            for pt in 0..game.grid().len() {
                let n = game.clear_set(pt).unwrap().len();
                assert!(n == 0 || (2..=4).contains(&n), "clear set of {n}");
            }
            let hints = game.hints();
            game.select(hints[rng.usize(..hints.len())]).unwrap();
        }
    }
}

#[test]
fn test_terminal_watch_single_notice() {
    let mut game = setup("0 . . 0 1 . . 1", 2);
    let mut watch = TerminalWatch::new(&game);
    let mut notices = 0;
    for pt in [1, 5, 2, 6] {
        game.select(pt).unwrap();
        if watch.observe(&game) {
            notices += 1;
        }
    }
    assert_eq!(notices, 1);
}

// =============================================================================
// Parity rewind
// =============================================================================

#[test]
fn test_rewind_terminates_even_or_exhausted() {
    for seed in 0..30 {
        let mut game = seeded(8, 8, 3, seed);
        let mut rng = fastrand::Rng::with_seed(seed * 7 + 1);
        play_out(&mut game, &mut rng);

        let before = game.history().cursor();
        game.undo_until_all_even();
        let all_even = game.color_counts().iter().all(|n| n % 2 == 0);
        assert!(all_even || game.history().cursor().is_none());
        assert!(game.history().cursor() <= before);
    }
}

#[test]
fn test_rewind_on_fresh_game_is_noop() {
    // Color 1 has three tiles but there is nothing to undo.
    let mut game = setup("0 . . 0 1 . 1 . 1", 2);
    assert_eq!(game.color_counts(), vec![2, 3]);
    assert_eq!(game.undo_until_all_even(), 0);
    assert_eq!(game.history().cursor(), None);
    assert!(game.history().is_empty());
    assert_eq!(game.color_counts(), vec![2, 3]);
}

#[test]
fn test_rewind_restores_cleared_colors() {
    let mut game = setup(
        "1 . . 1 0 .
         . . . 0 . 0",
        2,
    );
    assert_eq!(game.select(10).unwrap(), ClearResult::Cleared(vec![4, 9, 11]));
    assert_eq!(game.select(1).unwrap(), ClearResult::Cleared(vec![0, 3]));
    assert_eq!(game.color_counts(), vec![0, 0]);

    // Both moves leave all counts even, so nothing is undone.
    assert_eq!(game.undo_until_all_even(), 0);

    let mut game = setup(
        "1 . . 1 0 .
         . . . 0 . 0
         . . . . . 0",
        2,
    );
    // Three of the four 0s go at once, leaving the 0 count odd.
    assert_eq!(game.select(10).unwrap(), ClearResult::Cleared(vec![4, 9, 11]));
    assert_eq!(game.select(1).unwrap(), ClearResult::Cleared(vec![0, 3]));
    assert_eq!(game.color_counts(), vec![1, 0]);

    assert_eq!(game.undo_until_all_even(), 2);
    assert_eq!(game.color_counts(), vec![4, 2]);
    assert_eq!(game.history().cursor(), None);
}
