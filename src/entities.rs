//! All game entity types — pure data, no game rules.

use crate::constants::{BIRD_HEIGHT, BIRD_WIDTH, PIPE_WIDTH, PLAYFIELD_HEIGHT};

// ── Geometry & colour ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Axis-aligned rectangle in playfield units, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap: rectangles that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

// ── Bird ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    /// Fixed after initialisation.
    pub x: f64,
    pub y: f64,
    /// Vertical velocity, positive = downward.
    pub vy: f64,
}

impl Bird {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, BIRD_WIDTH, BIRD_HEIGHT)
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// Two vertically-opposed segments with a passable gap between them.
/// The gap is fixed when the pair is spawned.
#[derive(Clone, Debug, PartialEq)]
pub struct ObstaclePair {
    pub x: f64,
    pub top_height: f64,
    pub bottom_height: f64,
}

impl ObstaclePair {
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, PIPE_WIDTH, self.top_height)
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::new(
            self.x,
            PLAYFIELD_HEIGHT - self.bottom_height,
            PIPE_WIDTH,
            self.bottom_height,
        )
    }

    pub fn gap(&self) -> f64 {
        PLAYFIELD_HEIGHT - self.top_height - self.bottom_height
    }

    /// True once the right edge has passed the left border of the playfield.
    pub fn is_off_screen(&self) -> bool {
        self.x + PIPE_WIDTH < 0.0
    }
}

// ── Phase ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Running,
    /// Carries the final score.
    Ended(u32),
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Owned by the driver and lent out by exclusive
/// reference to the tick and input handlers.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub bird: Bird,
    pub obstacles: Vec<ObstaclePair>,
    pub score: u32,
    /// Running frames simulated so far; gates the spawn cadence.
    pub frame: u64,
    pub phase: GamePhase,
    /// Set when a tick faults; cleared only by a restart.
    pub error: Option<String>,
}

/// Read-only view handed to the UI chrome.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub error: Option<String>,
}
