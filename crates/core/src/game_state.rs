//! Game state module - the simulation half of the game loop
//!
//! Owns the grid, the active piece, and the score. Every position or shape
//! mutation is gated by the board collision check, and the active piece is an
//! immutable value replaced wholesale on each move, rotation, and spawn.

use crate::board::Board;
use crate::pieces::{spawn_shape, Shape};
use crate::rng::ShapeSource;
use crate::types::{GameAction, PieceKind, BOARD_WIDTH, GRAVITY_INTERVAL_MS};

/// Active falling piece: one shape rotation plus its board anchor.
///
/// The anchor is the top-left corner of the shape's bounding box; y may be
/// negative while the piece is still above the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Place a fresh piece of the given kind at the top of the board,
    /// horizontally centered. Integer division biases even-width shapes
    /// slightly left of true center.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8;
        Self { shape, x, y: 0 }
    }

    /// The piece shifted by (dx, dy); collision is the caller's concern.
    pub fn moved(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// The piece with its shape turned a quarter clockwise, same anchor.
    pub fn rotated(self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..self
        }
    }
}

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    score: u32,
    game_over: bool,
    gravity_timer_ms: u32,
}

impl GameState {
    /// Start a session on an empty board, drawing the first piece from
    /// `shapes`.
    pub fn new(shapes: &mut dyn ShapeSource) -> Self {
        Self::with_board(Board::new(), shapes)
    }

    /// Start a session from a pre-filled grid.
    ///
    /// If the first piece collides at its spawn position the session begins
    /// already over, without any input or gravity processing.
    pub fn with_board(board: Board, shapes: &mut dyn ShapeSource) -> Self {
        let active = Piece::spawn(shapes.next_kind());
        let game_over = board.collides(active.x, active.y, &active.shape);
        Self {
            board,
            active,
            score: 0,
            game_over,
            gravity_timer_ms: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Apply a single input action.
    ///
    /// Returns whether the action changed the piece. `Quit` belongs to the
    /// session loop and is a no-op here, as is everything after game over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Quit => false,
        }
    }

    /// Advance wall-clock time. Once the gravity interval has elapsed the
    /// active piece is forced down one row; a blocked piece settles instead.
    /// Returns true when a gravity step fired.
    pub fn tick(&mut self, elapsed_ms: u32, shapes: &mut dyn ShapeSource) -> bool {
        if self.game_over {
            return false;
        }

        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        if self.gravity_timer_ms < GRAVITY_INTERVAL_MS {
            return false;
        }
        self.gravity_timer_ms = 0;

        if !self.try_move(0, 1) {
            self.settle(shapes);
        }
        true
    }

    /// Replace the active piece with its shifted copy if that spot is free.
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let next = self.active.moved(dx, dy);
        if self.board.collides(next.x, next.y, &next.shape) {
            return false;
        }
        self.active = next;
        true
    }

    /// Swap in the rotated shape at the same anchor, collision permitting.
    /// No wall kick: near a boundary the rotation simply fails and the
    /// current shape stays.
    fn try_rotate(&mut self) -> bool {
        let next = self.active.rotated();
        if self.board.collides(next.x, next.y, &next.shape) {
            return false;
        }
        self.active = next;
        true
    }

    /// Merge the active piece into the grid, clear complete rows, bump the
    /// score by the cleared count, and spawn the next piece. The session ends
    /// when the new piece collides at its spawn position.
    fn settle(&mut self, shapes: &mut dyn ShapeSource) {
        self.board
            .merge(self.active.x, self.active.y, &self.active.shape);
        let cleared = self.board.clear_full_rows();
        self.score += cleared.len() as u32;

        let next = Piece::spawn(shapes.next_kind());
        if self.board.collides(next.x, next.y, &next.shape) {
            self.game_over = true;
        }
        self.active = next;
    }
}
