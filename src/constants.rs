//! Tuning constants for the playfield, physics and difficulty ramp.
//!
//! All distances are in logical playfield units; the terminal surface scales
//! them onto whatever pixel grid the terminal offers.

use crate::entities::Rgb;

// ── Playfield ─────────────────────────────────────────────────────────────────

pub const PLAYFIELD_WIDTH: f64 = 400.0;
pub const PLAYFIELD_HEIGHT: f64 = 600.0;

// ── Bird ──────────────────────────────────────────────────────────────────────

pub const BIRD_START_X: f64 = 50.0;
pub const BIRD_START_Y: f64 = PLAYFIELD_HEIGHT / 2.0;
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 30.0;

/// Added to the bird's vertical velocity every running frame.
pub const GRAVITY: f64 = 0.6;
/// Velocity the bird is given on every tap (negative = upward).
pub const FLAP_STRENGTH: f64 = -10.0;

// ── Obstacles ─────────────────────────────────────────────────────────────────

pub const PIPE_WIDTH: f64 = 60.0;
pub const PIPE_SPEED: f64 = 2.0;
/// A new obstacle pair appears every this many running frames.
pub const SPAWN_INTERVAL: u64 = 100;
pub const MIN_SEGMENT_HEIGHT: f64 = 50.0;

// ── Difficulty ramp ───────────────────────────────────────────────────────────

pub const INITIAL_GAP: f64 = 300.0;
pub const MIN_GAP: f64 = 200.0;
pub const GAP_STEP: f64 = 20.0;
/// Points needed to shrink the gap by one step.
pub const DIFFICULTY_INTERVAL: u32 = 5;

// ── Palette ───────────────────────────────────────────────────────────────────

pub const C_SKY: Rgb = Rgb(0x87, 0xCE, 0xEB);
pub const C_BIRD: Rgb = Rgb(0xFF, 0xD7, 0x00);
pub const C_PIPE: Rgb = Rgb(0x22, 0x8B, 0x22);
pub const C_TEXT: Rgb = Rgb(0xFF, 0xFF, 0xFF);

// ── Text layout ───────────────────────────────────────────────────────────────

pub const SCORE_POS: (f64, f64) = (10.0, 30.0);
pub const START_PROMPT: &str = "Click to Start";
pub const START_PROMPT_POS: (f64, f64) = (PLAYFIELD_WIDTH / 2.0 - 70.0, PLAYFIELD_HEIGHT / 2.0);
