//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple character framebuffer that is flushed to a
//! terminal backend with run-based diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the state-to-frame projection pure ([`GameView`])
//! - Flush only what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::FrameBuffer;
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use screen::TerminalScreen;
