//! Puzzle engine behaviour tests.
//!
//! These tests walk through concrete boards to pin down move legality,
//! undo, and when a board counts as won.

use ball_sort::core::{Board, Color, EngineConfig, GameRng, Move, UndoHistory};
use ball_sort::{EngineError, MoveRejection, PuzzleEngine};

fn board(layout: &[&[u8]]) -> Board {
    Board::from_layout(4, layout).unwrap()
}

// =============================================================================
// Level Generation
// =============================================================================

/// Test that every tier deals the right number of colors and tubes.
#[test]
fn test_generation_follows_tiers() {
    let engine = PuzzleEngine::default();
    let mut rng = GameRng::new(2026);

    let expected = [
        (1..=3, 2, 1),
        (4..=8, 3, 1),
        (9..=15, 4, 2),
        (16..=25, 5, 2),
        (26..=40, 6, 2),
    ];
    for (levels, colors, empty) in expected {
        for level in levels {
            let dealt = engine.generate_level(level, &mut rng);
            let tubes = dealt.board.tubes();

            assert_eq!(dealt.colors, colors, "level {}", level);
            assert_eq!(tubes.len(), colors as usize + empty, "level {}", level);
            assert_eq!(tubes.iter().filter(|t| t.is_empty()).count(), empty);
        }
    }
}

/// Test that the initial snapshot stays put while the board is played.
#[test]
fn test_initial_snapshot_is_independent() {
    let engine = PuzzleEngine::default();
    let mut dealt = engine.generate_level(1, &mut GameRng::new(1));

    // The last tube is always empty, so the first tube can move onto it.
    let empty = dealt.board.tube_count() - 1;
    engine.apply_move(&mut dealt.board, 0, empty).unwrap();

    assert_ne!(dealt.board, dealt.initial);
    assert_eq!(dealt.initial.tube(0).unwrap().len(), 4);
}

/// Test that consecutive deals from one RNG differ.
#[test]
fn test_consecutive_deals_differ() {
    let engine = PuzzleEngine::default();
    let mut rng = GameRng::new(99);

    let deals: Vec<Board> = (0..5).map(|_| engine.generate_level(30, &mut rng).board).collect();
    assert!(deals.windows(2).any(|pair| pair[0] != pair[1]));
}

/// Test generation with a larger tube capacity.
#[test]
fn test_generation_custom_capacity() {
    let engine = PuzzleEngine::new(EngineConfig::default().with_capacity(6));
    let dealt = engine.generate_level(4, &mut GameRng::new(5));

    assert_eq!(dealt.board.capacity(), 6);
    assert!(dealt.board.tubes()[..3].iter().all(|t| t.len() == 6));
    assert_eq!(dealt.board.total_balls(), 18);
}

// =============================================================================
// Moves
// =============================================================================

/// A=[2,1,1,1], B=[1,1,1]: the move is legal and completes B.
#[test]
fn test_move_completes_destination() {
    let engine = PuzzleEngine::default();
    let mut b = board(&[&[2, 1, 1, 1], &[1, 1, 1]]);

    assert!(engine.is_legal_move(b.tube(0).unwrap(), b.tube(1).unwrap()));

    let mv = engine.apply_move(&mut b, 0, 1).unwrap();

    assert_eq!(mv, Move::new(0, 1, Color(1)));
    assert_eq!(b, board(&[&[2, 1, 1], &[1, 1, 1, 1]]));
    assert!(b.tube(1).unwrap().is_complete());

    // A is left partially filled, so the board as a whole is not solved.
    assert!(!engine.is_won(&b, true));
}

/// The same move wins once every other tube is empty or complete.
#[test]
fn test_move_wins_when_rest_is_sorted() {
    let engine = PuzzleEngine::default();
    let mut b = board(&[&[1], &[1, 1, 1], &[2, 2, 2, 2], &[]]);

    engine.apply_move(&mut b, 0, 1).unwrap();

    assert!(engine.is_won(&b, true));
}

/// Test that an illegal move reports why and changes nothing.
#[test]
fn test_illegal_move_reports_reason() {
    let engine = PuzzleEngine::default();
    let mut b = board(&[&[1, 2], &[1, 1]]);
    let before = b.clone();

    let err = engine.apply_move(&mut b, 0, 1).unwrap_err();

    assert_eq!(
        err,
        EngineError::IllegalMove {
            from: 0,
            to: 1,
            reason: MoveRejection::ColorMismatch
        }
    );
    assert_eq!(b, before);
}

// =============================================================================
// Undo
// =============================================================================

/// Test that a chain of moves unwinds back to the start.
#[test]
fn test_undo_chain() {
    let engine = PuzzleEngine::default();
    let mut b = board(&[&[1, 2, 1, 2], &[2, 1, 2, 1], &[], &[]]);
    let start = b.clone();
    let mut history = UndoHistory::new();

    for (from, to) in [(0, 2), (1, 3), (0, 3), (1, 2)] {
        history.push(engine.apply_move(&mut b, from, to).unwrap());
    }
    assert_eq!(history.len(), 4);

    while !history.is_empty() {
        engine.undo(&mut b, &mut history).unwrap();
    }

    assert_eq!(b, start);
    assert_eq!(engine.undo(&mut b, &mut history), Err(EngineError::EmptyHistory));
    assert_eq!(b, start);
}

// =============================================================================
// Win Detection
// =============================================================================

/// A=[1,1,1,1], B=[]: not won before a move, won after A->B then undo.
#[test]
fn test_sorted_deal_needs_a_move() {
    let engine = PuzzleEngine::default();
    let mut b = board(&[&[1, 1, 1, 1], &[]]);
    let mut history = UndoHistory::new();
    let mut has_moved = false;

    assert!(!engine.is_won(&b, has_moved));

    history.push(engine.apply_move(&mut b, 0, 1).unwrap());
    has_moved = true;
    assert!(!engine.is_won(&b, has_moved));

    engine.undo(&mut b, &mut history).unwrap();

    assert_eq!(b, board(&[&[1, 1, 1, 1], &[]]));
    assert!(engine.is_won(&b, has_moved));
}

/// Test that a freshly generated level never counts as won.
#[test]
fn test_fresh_level_not_won() {
    let engine = PuzzleEngine::default();
    let mut rng = GameRng::new(8);

    for level in 1..=30 {
        let dealt = engine.generate_level(level, &mut rng);
        assert!(!engine.is_won(&dealt.board, false));
    }
}

/// Test that an extra tube does not affect win detection.
#[test]
fn test_extra_tube_still_wins() {
    let engine = PuzzleEngine::default();
    let mut b = board(&[&[2, 2, 2, 2], &[1, 1, 1], &[1]]);
    engine.add_extra_tube(&mut b);

    engine.apply_move(&mut b, 2, 1).unwrap();

    assert_eq!(b.tube_count(), 4);
    assert!(engine.is_won(&b, true));
}

/// Test that legal moves follow the board as it changes.
#[test]
fn test_legal_moves_track_board() {
    let engine = PuzzleEngine::default();
    let mut b = board(&[&[1, 2], &[2, 1], &[]]);

    assert_eq!(engine.legal_moves(&b), vec![(0, 2), (1, 2)]);

    engine.apply_move(&mut b, 0, 2).unwrap(); // [1] [2 1] [2]
    engine.apply_move(&mut b, 1, 0).unwrap(); // [1 1] [2] [2]
    engine.apply_move(&mut b, 2, 1).unwrap(); // [1 1] [2 2] []

    assert!(!engine.is_won(&b, true)); // half-full tubes are not sorted
    assert!(engine.legal_moves(&b).contains(&(0, 2)));
}
