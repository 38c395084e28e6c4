//! Terminal-backed implementation of the session `Screen` seam.

use anyhow::Result;
use crossterm::terminal;

use blockfall_session::Screen;

use crate::core::GameState;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Owns the renderer, the view, and one reusable framebuffer.
pub struct TerminalScreen {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    /// Switch the terminal into game mode (raw, alternate screen).
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal. Safe to call on every exit path.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TerminalScreen {
    fn present(&mut self, state: &GameState) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        self.view.render_into(state, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
