//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides the
//! real-terminal [`InputSource`](blockfall_session::InputSource)
//! implementation used by the session loop.

pub mod map;
pub mod source;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::TerminalInput;
