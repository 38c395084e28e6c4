//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Wall-clock time between forced gravity steps (milliseconds)
pub const GRAVITY_INTERVAL_MS: u32 = 500;

/// Input poll timeout per loop iteration (milliseconds).
///
/// Bounds CPU spin and sets the redraw cadence; correctness does not depend
/// on it.
pub const INPUT_POLL_MS: u64 = 100;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All seven kinds, in shape-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];
}

/// Game actions
///
/// One action is applied per input poll. `Quit` is handled by the session
/// loop itself; the simulation treats it as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Quit,
}
