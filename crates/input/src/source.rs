//! Crossterm-backed input source for real terminal sessions.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall_session::InputSource;

use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

/// Reads at most one key per poll from the terminal event stream.
///
/// Only key-press events map to actions; repeat and release events from
/// enhanced terminals are dropped.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> Result<Option<GameAction>> {
        if !event::poll(timeout)? {
            // No key this tick.
            return Ok(None);
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if should_quit(key) {
                    return Ok(Some(GameAction::Quit));
                }
                return Ok(handle_key_event(key));
            }
        }
        Ok(None)
    }

    fn wait_key(&mut self) -> Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}
