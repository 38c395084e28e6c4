//! Terminal blockfall runner (default binary).
//!
//! Wires the crossterm-backed input and screen adapters to the session loop.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use blockfall::core::SimpleRng;
use blockfall::input::TerminalInput;
use blockfall::session::Session;
use blockfall::term::TerminalScreen;

fn main() -> Result<()> {
    let mut screen = TerminalScreen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TerminalScreen) -> Result<()> {
    let shapes = SimpleRng::new(clock_seed());
    let mut session = Session::new(TerminalInput::new(), screen, shapes);
    session.run()?;
    Ok(())
}

/// Seed the shape generator from the wall clock; any value gives a playable
/// uniform sequence.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
