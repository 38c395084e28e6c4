//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: a scripted shape source reproduces identical games
//! - **Testable**: the update operations are plain functions over values
//! - **Portable**: can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection and line clearing
//! - [`game_state`]: game state including the active piece, score, and timing
//! - [`pieces`]: tetromino shape matrices and clockwise rotation
//! - [`rng`]: the injected shape source and its default LCG implementation
//!
//! # Game Rules
//!
//! This is the minimal classic ruleset:
//!
//! - Pieces are picked uniformly at random from the seven tetrominoes
//! - Rotation swaps in the clockwise-rotated matrix, with no wall kicks
//! - A piece blocked by gravity settles immediately, no lock delay
//! - Each cleared row scores one point, with no multi-line bonus
//! - The session ends when a freshly spawned piece collides at spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, SequenceSource};
//! use blockfall_types::{GameAction, PieceKind};
//!
//! let mut shapes = SequenceSource::new(vec![PieceKind::O]);
//! let mut game = GameState::new(&mut shapes);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.tick(500, &mut shapes);
//!
//! assert_eq!(game.active().x, 5);
//! assert_eq!(game.active().y, 1);
//! ```
//!
//! # Timing
//!
//! Gravity accumulates inside [`GameState::tick`](game_state::GameState::tick):
//! call it every loop iteration with the elapsed wall-clock milliseconds and
//! it forces one row of descent per 500ms interval.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Piece};
pub use pieces::{spawn_shape, Shape};
pub use rng::{SequenceSource, ShapeSource, SimpleRng};
