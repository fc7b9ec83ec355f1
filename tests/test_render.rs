mod common;

use common::{Op, Recorder};
use flappy_gates::compute::init_state;
use flappy_gates::constants::*;
use flappy_gates::entities::*;
use flappy_gates::error::GameError;
use flappy_gates::render::{render, Surface};
use flappy_gates::terminal::{TerminalSurface, MIN_COLS, MIN_ROWS};

fn running_with_pairs() -> GameState {
    let mut s = init_state();
    s.phase = GamePhase::Running;
    s.score = 3;
    s.obstacles.push(ObstaclePair { x: 200.0, top_height: 120.0, bottom_height: 230.0 });
    s.obstacles.push(ObstaclePair { x: 380.0, top_height: 90.0, bottom_height: 260.0 });
    s
}

// ── render ────────────────────────────────────────────────────────────────────

#[test]
fn not_started_draws_background_and_prompt_only() {
    let mut r = Recorder::default();
    render(&mut r, &init_state()).unwrap();
    assert_eq!(
        r.ops,
        vec![
            Op::Clear,
            Op::Rect(Rect::new(0.0, 0.0, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT), C_SKY),
            Op::Text("Click to Start".to_string(), 130.0, 300.0),
            Op::Present,
        ]
    );
}

#[test]
fn running_draws_bird_pairs_and_score() {
    let s = running_with_pairs();
    let mut r = Recorder::default();
    render(&mut r, &s).unwrap();

    let rects = r.rects();
    assert_eq!(rects.len(), 1 + 1 + 4); // sky, bird, two segments per pair
    assert!(rects.contains(&(s.bird.rect(), C_BIRD)));
    assert!(rects.contains(&(Rect::new(200.0, 0.0, PIPE_WIDTH, 120.0), C_PIPE)));
    assert!(rects.contains(&(Rect::new(200.0, 370.0, PIPE_WIDTH, 230.0), C_PIPE)));
    assert!(rects.contains(&(Rect::new(380.0, 340.0, PIPE_WIDTH, 260.0), C_PIPE)));

    assert!(r.ops.contains(&Op::Text("Score: 3".to_string(), 10.0, 30.0)));
    assert!(!r.texts().contains(&"Click to Start".to_string()));
}

#[test]
fn ended_frame_still_draws_the_scene() {
    let mut s = running_with_pairs();
    s.phase = GamePhase::Ended(3);
    let mut r = Recorder::default();
    render(&mut r, &s).unwrap();
    assert!(r.rects().contains(&(s.bird.rect(), C_BIRD)));
    assert_eq!(r.texts(), vec!["Score: 3".to_string()]);
}

#[test]
fn present_failure_propagates() {
    let mut r = Recorder { fail_present: true, ..Default::default() };
    let err = render(&mut r, &init_state()).unwrap_err();
    assert!(matches!(err, GameError::Io(_)));
}

// ── terminal surface ──────────────────────────────────────────────────────────

#[test]
fn terminal_rejects_tiny_area() {
    let err = TerminalSurface::with_size(Vec::new(), MIN_COLS - 1, MIN_ROWS).err().unwrap();
    assert!(matches!(err, GameError::SurfaceUnavailable(_)));
    let err = TerminalSurface::with_size(Vec::new(), MIN_COLS, MIN_ROWS - 1).err().unwrap();
    assert!(matches!(err, GameError::SurfaceUnavailable(_)));
}

#[test]
fn terminal_rejects_zero_size() {
    let err = TerminalSurface::with_size(Vec::new(), 0, 0).err().unwrap();
    assert!(matches!(err, GameError::SurfaceUnavailable(_)));
    assert!(err.to_string().starts_with("Surface unavailable: terminal too small"));
}

#[test]
fn terminal_accepts_minimum_size() {
    let surface = TerminalSurface::with_size(Vec::new(), MIN_COLS, MIN_ROWS).unwrap();
    assert!(surface.layout().cols > 0 && surface.layout().rows > 0);
}

#[test]
fn io_error_displays_its_source() {
    let err = GameError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"));
    assert_eq!(err.to_string(), "pipe closed");
}

#[test]
fn terminal_canvas_keeps_aspect_and_centres() {
    // 30 rows = 60 pixels tall → 40 pixels wide, centred in 100 columns
    let surface = TerminalSurface::with_size(Vec::new(), 100, 30).unwrap();
    let layout = surface.layout();
    assert_eq!(layout.cols, 40);
    assert_eq!(layout.rows, 30);
    assert_eq!(layout.left, 30);

    // Narrow terminal: width limits, height shrinks
    let surface = TerminalSurface::with_size(Vec::new(), 20, 40).unwrap();
    let layout = surface.layout();
    assert_eq!(layout.cols, 20);
    assert_eq!(layout.rows, 15);
    assert_eq!(layout.left, 0);
}

#[test]
fn terminal_renders_prompt_text_and_half_blocks() {
    let mut surface = TerminalSurface::with_size(Vec::new(), 40, 30).unwrap();
    render(&mut surface, &init_state()).unwrap();
    let out = String::from_utf8(surface.into_inner()).unwrap();
    assert!(out.contains("Click to Start"));
    assert!(out.contains('\u{2580}'));
}

#[test]
fn terminal_renders_score_when_running() {
    let mut surface = TerminalSurface::with_size(Vec::new(), 40, 30).unwrap();
    render(&mut surface, &running_with_pairs()).unwrap();
    let out = String::from_utf8(surface.into_inner()).unwrap();
    assert!(out.contains("Score: 3"));
    assert!(!out.contains("Click to Start"));
}

#[test]
fn terminal_clear_drops_previous_text() {
    let mut surface = TerminalSurface::with_size(Vec::new(), 40, 30).unwrap();
    surface.fill_text("stale", 10.0, 100.0, C_TEXT);
    surface.clear();
    surface.present().unwrap();
    let out = String::from_utf8(surface.into_inner()).unwrap();
    assert!(!out.contains("stale"));
}

#[test]
fn terminal_resize_rejects_tiny_area_and_keeps_layout() {
    let mut surface = TerminalSurface::with_size(Vec::new(), 40, 30).unwrap();
    let before = surface.layout();
    assert!(surface.resize(3, 3).is_err());
    assert_eq!(surface.layout(), before);
    surface.resize(100, 30).unwrap();
    assert_eq!(surface.layout().left, 30);
}
