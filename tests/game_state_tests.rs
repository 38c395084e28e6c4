//! Game state scenario tests

use blockfall::core::{Board, GameState, SequenceSource};
use blockfall::types::{GameAction, PieceKind, BOARD_WIDTH, GRAVITY_INTERVAL_MS};

#[test]
fn test_o_piece_rests_on_the_floor_at_anchor_18() {
    let mut shapes = SequenceSource::new(vec![PieceKind::O]);
    let mut state = GameState::new(&mut shapes);
    assert_eq!((state.active().x, state.active().y), (4, 0));

    // Gravity moves one row per interval until the floor blocks it.
    for _ in 0..18 {
        assert!(state.tick(GRAVITY_INTERVAL_MS, &mut shapes));
    }
    assert_eq!(state.active().y, 18);

    // The next step cannot move down, so the piece settles.
    state.tick(GRAVITY_INTERVAL_MS, &mut shapes);
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert!(state.board().is_occupied(x, y));
    }
    assert_eq!((state.active().x, state.active().y), (4, 0));
}

#[test]
fn test_single_line_clear_scores_one() {
    // Bottom row complete except the two columns the O will land in.
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        if x != 4 && x != 5 {
            board.set(x, 19, true);
        }
    }

    let mut shapes = SequenceSource::new(vec![PieceKind::O]);
    let mut state = GameState::with_board(board, &mut shapes);

    while state.apply_action(GameAction::SoftDrop) {}
    state.tick(GRAVITY_INTERVAL_MS, &mut shapes);

    assert_eq!(state.score(), 1);

    // Row 19 cleared; the O's upper half shifted down into it.
    assert!(state.board().is_occupied(4, 19));
    assert!(state.board().is_occupied(5, 19));
    assert!(!state.board().is_occupied(0, 19));
    for x in 0..BOARD_WIDTH as i8 {
        assert!(!state.board().is_occupied(x, 0));
    }
}

#[test]
fn test_blocked_spawn_is_immediate_game_over() {
    let mut board = Board::new();
    for x in 3..=6 {
        board.set(x, 0, true);
        board.set(x, 1, true);
    }

    let mut shapes = SequenceSource::new(vec![PieceKind::T]);
    let mut state = GameState::with_board(board, &mut shapes);

    assert!(state.game_over());

    // Terminal state: no further input or gravity processing.
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.tick(GRAVITY_INTERVAL_MS, &mut shapes));
    assert_eq!(state.score(), 0);
}

#[test]
fn test_active_piece_never_overlaps_the_stack() {
    // Play a scripted game and check the invariant after every mutation.
    let mut shapes = SequenceSource::new(vec![
        PieceKind::I,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
    ]);
    let mut state = GameState::new(&mut shapes);

    let actions = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::MoveRight,
    ];
    let mut i = 0;
    while !state.game_over() {
        state.apply_action(actions[i % actions.len()]);
        state.tick(GRAVITY_INTERVAL_MS, &mut shapes);
        i += 1;

        if !state.game_over() {
            let piece = state.active();
            assert!(
                !state.board().collides(piece.x, piece.y, &piece.shape),
                "active piece overlaps stack after step {}",
                i
            );
        }
        assert!(i < 10_000, "game never ended");
    }
}

#[test]
fn test_multi_row_clear_scores_per_row() {
    // Two bottom rows complete except columns 4-5; one O finishes both.
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        if x != 4 && x != 5 {
            board.set(x, 18, true);
            board.set(x, 19, true);
        }
    }

    let mut shapes = SequenceSource::new(vec![PieceKind::O]);
    let mut state = GameState::with_board(board, &mut shapes);

    while state.apply_action(GameAction::SoftDrop) {}
    state.tick(GRAVITY_INTERVAL_MS, &mut shapes);

    assert_eq!(state.score(), 2);
    assert!(state.board().cells().iter().all(|&c| !c));
}
