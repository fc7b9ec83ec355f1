//! Game phase controller: routes taps, drives ticks, performs restarts.
//!
//! The driver owns the `GameState` and lends it to these functions one call
//! at a time, so a tap can never interleave with a half-finished tick.

use rand::Rng;

use crate::compute::{init_state, step};
use crate::constants::FLAP_STRENGTH;
use crate::entities::{GamePhase, GameState, Snapshot};
use crate::error::GameError;
use crate::render::{render, Surface};

/// What the driver should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    /// Schedule another tick for the next frame.
    Continue,
    /// Stop scheduling until a restart.
    Stop,
}

/// Primary pointer activation.  Starts the game if needed, then overwrites
/// the bird's velocity with the flap impulse.  Ignored once the game has
/// ended or faulted.
pub fn tap(state: &mut GameState) {
    if state.error.is_some() {
        return;
    }
    match state.phase {
        GamePhase::Ended(_) => return,
        GamePhase::NotStarted => {
            log::info!("game started");
            state.phase = GamePhase::Running;
        }
        GamePhase::Running => {}
    }
    state.bird.vy = FLAP_STRENGTH;
}

/// Full reset back to `NotStarted`, clearing any error.
pub fn reset(state: &mut GameState) {
    let fresh = init_state();
    if *state != fresh {
        log::info!("restart (was {:?}, score {})", state.phase, state.score);
        *state = fresh;
    }
}

/// One frame: physics when running, then render.
///
/// A fault is logged, stored on the state for the chrome to show, and stops
/// the loop; it is never retried.
pub fn tick<S, R>(state: &mut GameState, surface: &mut S, rng: &mut R) -> FrameRequest
where
    S: Surface + ?Sized,
    R: Rng,
{
    if state.error.is_some() || matches!(state.phase, GamePhase::Ended(_)) {
        return FrameRequest::Stop;
    }

    if let Err(err) = run_frame(state, surface, rng) {
        let err = into_tick_fault(err);
        log::error!("{err}");
        state.error = Some(err.to_string());
        return FrameRequest::Stop;
    }

    match state.phase {
        GamePhase::Ended(_) => FrameRequest::Stop,
        GamePhase::NotStarted | GamePhase::Running => FrameRequest::Continue,
    }
}

fn run_frame<S, R>(state: &mut GameState, surface: &mut S, rng: &mut R) -> Result<(), GameError>
where
    S: Surface + ?Sized,
    R: Rng,
{
    if state.phase == GamePhase::Running {
        step(state, rng)?;
    }
    render(surface, state)
}

fn into_tick_fault(err: GameError) -> GameError {
    match err {
        GameError::TickFault(_) => err,
        other => GameError::TickFault(other.to_string()),
    }
}

/// What the chrome needs to draw around the canvas.
pub fn snapshot(state: &GameState) -> Snapshot {
    Snapshot {
        phase: state.phase,
        score: state.score,
        error: state.error.clone(),
    }
}
