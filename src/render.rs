//! Render step — translates game state into drawing calls.
//!
//! No game logic happens here.  The concrete drawing backend sits behind the
//! `Surface` trait so the same render path drives the terminal and tests.

use crate::constants::{
    C_BIRD, C_PIPE, C_SKY, C_TEXT, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, SCORE_POS, START_PROMPT,
    START_PROMPT_POS,
};
use crate::entities::{GamePhase, GameState, Rect, Rgb};
use crate::error::GameError;

/// A fixed-size logical canvas of `PLAYFIELD_WIDTH` x `PLAYFIELD_HEIGHT` units.
pub trait Surface {
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Draw `text` with its baseline-left corner at (`x`, `y`).
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Rgb);

    /// Push the finished frame to wherever it is displayed.
    fn present(&mut self) -> Result<(), GameError>;
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<S: Surface + ?Sized>(surface: &mut S, state: &GameState) -> Result<(), GameError> {
    surface.clear();
    surface.fill_rect(Rect::new(0.0, 0.0, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT), C_SKY);

    match state.phase {
        GamePhase::NotStarted => draw_start_prompt(surface),
        // The frame that ends the game still gets drawn.
        GamePhase::Running | GamePhase::Ended(_) => {
            draw_bird(surface, state);
            draw_obstacles(surface, state);
            draw_score(surface, state);
        }
    }

    surface.present()
}

// ── Pieces ────────────────────────────────────────────────────────────────────

fn draw_bird<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    surface.fill_rect(state.bird.rect(), C_BIRD);
}

fn draw_obstacles<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    for pair in &state.obstacles {
        surface.fill_rect(pair.top_rect(), C_PIPE);
        surface.fill_rect(pair.bottom_rect(), C_PIPE);
    }
}

fn draw_score<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    let (x, y) = SCORE_POS;
    surface.fill_text(&format!("Score: {}", state.score), x, y, C_TEXT);
}

fn draw_start_prompt<S: Surface + ?Sized>(surface: &mut S) {
    let (x, y) = START_PROMPT_POS;
    surface.fill_text(START_PROMPT, x, y, C_TEXT);
}
