//! Pure game-logic functions.
//!
//! Everything here works on an exclusively borrowed `GameState` (and, where
//! needed, an RNG handle).  Side effects are limited to the state itself, the
//! injected RNG and log output.

use rand::Rng;

use crate::constants::{
    BIRD_HEIGHT, BIRD_START_X, BIRD_START_Y, DIFFICULTY_INTERVAL, GAP_STEP, GRAVITY, INITIAL_GAP,
    MIN_GAP, MIN_SEGMENT_HEIGHT, PIPE_SPEED, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, SPAWN_INTERVAL,
};
use crate::entities::{Bird, GamePhase, GameState, ObstaclePair};
use crate::error::GameError;

// ── Difficulty ────────────────────────────────────────────────────────────────

/// Vertical gap between the two segments of a pair spawned at `score`.
///
/// Every `DIFFICULTY_INTERVAL` points shrink the gap by `GAP_STEP`, never
/// below `MIN_GAP`.
pub fn gap_for_score(score: u32) -> f64 {
    let steps = (score / DIFFICULTY_INTERVAL) as f64;
    (INITIAL_GAP - steps * GAP_STEP).max(MIN_GAP)
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh state: bird at its start position, no obstacles, waiting for a tap.
pub fn init_state() -> GameState {
    GameState {
        bird: Bird {
            x: BIRD_START_X,
            y: BIRD_START_Y,
            vy: 0.0,
        },
        obstacles: Vec::new(),
        score: 0,
        frame: 0,
        phase: GamePhase::NotStarted,
        error: None,
    }
}

// ── Obstacle generation ──────────────────────────────────────────────────────

/// Build a new pair at the right edge, sized for the current score.
pub fn spawn_obstacle(score: u32, rng: &mut impl Rng) -> ObstaclePair {
    spawn_obstacle_with_gap(gap_for_score(score), rng)
}

/// Build a new pair at the right edge with an explicit gap.
///
/// `top_height + gap + bottom_height == PLAYFIELD_HEIGHT` holds whenever the
/// gap fits in the playfield.  A gap taller than the playfield leaves both
/// segments empty.
pub fn spawn_obstacle_with_gap(gap: f64, rng: &mut impl Rng) -> ObstaclePair {
    let available = PLAYFIELD_HEIGHT - gap;
    let lo = MIN_SEGMENT_HEIGHT;
    let hi = available - MIN_SEGMENT_HEIGHT;

    let top_height = if hi >= lo {
        rng.gen_range(lo..=hi)
    } else {
        // Segments can't both reach their minimum height: centre the gap.
        log::warn!(
            "gap {gap} leaves {available} units for segments, below 2 x {MIN_SEGMENT_HEIGHT}; centring"
        );
        (available / 2.0).max(0.0)
    };

    ObstaclePair {
        x: PLAYFIELD_WIDTH,
        top_height,
        bottom_height: (PLAYFIELD_HEIGHT - top_height - gap).max(0.0),
    }
}

/// Append a pair when the frame counter lands on the spawn cadence.
/// Returns whether a pair was spawned.
pub fn maybe_spawn_obstacle(state: &mut GameState, rng: &mut impl Rng) -> bool {
    if state.frame % SPAWN_INTERVAL != 0 {
        return false;
    }
    let pair = spawn_obstacle(state.score, rng);
    log::debug!(
        "frame {}: spawned pair top={:.1} bottom={:.1} gap={:.1}",
        state.frame,
        pair.top_height,
        pair.bottom_height,
        pair.gap()
    );
    state.obstacles.push(pair);
    true
}

// ── Per-frame physics (RNG is injected) ──────────────────────────────────────

/// Move to `Ended` with the current score.  Only the first end condition in a
/// frame counts.
fn end_game(state: &mut GameState, reason: &str) {
    if state.phase == GamePhase::Running {
        log::info!("game over ({reason}), final score {}", state.score);
        state.phase = GamePhase::Ended(state.score);
    }
}

/// Advance the simulation by one running frame.
///
/// Order: bird integration, spawn, obstacle movement and collision, removal
/// and scoring, bounds check, frame counter.  An end condition does not cut
/// the frame short, but pairs are no longer removed or scored after it.
pub fn step(state: &mut GameState, rng: &mut impl Rng) -> Result<(), GameError> {
    // ── 1. Bird ──────────────────────────────────────────────────────────────
    state.bird.y += state.bird.vy;
    state.bird.vy += GRAVITY;
    if !state.bird.y.is_finite() || !state.bird.vy.is_finite() {
        return Err(GameError::TickFault(format!(
            "bird left the number line (y={}, vy={})",
            state.bird.y, state.bird.vy
        )));
    }

    // ── 2. Spawn ─────────────────────────────────────────────────────────────
    maybe_spawn_obstacle(state, rng);

    // ── 3. Move obstacles & collide ──────────────────────────────────────────
    let bird = state.bird.rect();
    let mut hit = false;
    for pair in &mut state.obstacles {
        pair.x -= PIPE_SPEED;
        if bird.overlaps(&pair.top_rect()) || bird.overlaps(&pair.bottom_rect()) {
            hit = true;
        }
    }
    if hit {
        end_game(state, "hit an obstacle");
    }

    // ── 4. Remove passed pairs, one point each ───────────────────────────────
    // Skipped once the game has ended so the score stays at the final score.
    if state.phase == GamePhase::Running {
        let before = state.obstacles.len();
        state.obstacles.retain(|p| !p.is_off_screen());
        let passed = (before - state.obstacles.len()) as u32;
        state.score += passed;
    }

    // ── 5. Bounds ────────────────────────────────────────────────────────────
    if state.bird.y < 0.0 || state.bird.y + BIRD_HEIGHT > PLAYFIELD_HEIGHT {
        end_game(state, "left the playfield");
    }

    // ── 6. Frame counter ─────────────────────────────────────────────────────
    state.frame += 1;
    Ok(())
}
