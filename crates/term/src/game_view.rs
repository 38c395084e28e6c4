//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: each board cell is a two-column glyph pair ("[]" filled, spaces
//! empty) at column x*2, row y; the score readout sits to the right of the
//! board on the top row; on game over a centered banner overlays the board.

use crate::core::GameState;
use crate::fb::FrameBuffer;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Glyph pair for one occupied board cell.
const FILLED: &str = "[]";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the board, the active piece overlay, and the score line.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into `fb`, resizing it to the viewport.
    ///
    /// Content that does not fit the viewport is clipped by the framebuffer.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(' ');

        // Settled grid cells.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                if state.board().is_occupied(x, y) {
                    fb.put_str(x as u16 * 2, y as u16, FILLED);
                }
            }
        }

        // Active piece overlay; rows above the visible top are skipped.
        let piece = state.active();
        for (dx, dy) in piece.shape.filled_cells() {
            let x = piece.x + dx;
            let y = piece.y + dy;
            if y >= 0 {
                fb.put_str(x as u16 * 2, y as u16, FILLED);
            }
        }

        // Score readout to the right of the board.
        let label_x = BOARD_WIDTH as u16 * 2 + 2;
        fb.put_str(label_x, 0, &format!("Score: {}", state.score()));

        if state.game_over() {
            self.draw_overlay_text(fb, "GAME OVER");
        }
    }

    /// Render into a fresh framebuffer (convenience for tests).
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, text: &str) {
        let board_cols = BOARD_WIDTH as u16 * 2;
        let text_w = text.chars().count() as u16;
        let x = board_cols.saturating_sub(text_w) / 2;
        let y = BOARD_HEIGHT as u16 / 2;
        fb.put_str(x, y, text);
    }
}
