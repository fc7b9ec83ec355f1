//! UI chrome — everything drawn around (or over) the playfield canvas.
//!
//! Reads only a `Snapshot`; game state is never touched from here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use flappy_gates::entities::{GamePhase, Snapshot};
use flappy_gates::error::GameError;
use flappy_gates::terminal::Layout;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HINT: Color = Color::DarkGrey;
const C_SCORE: Color = Color::Yellow;
const C_ERROR: Color = Color::Red;
const C_PANEL: Color = Color::White;

const CONTROLS: &str = "SPACE / click : Flap   R : Restart   Q : Quit";

// ── Public entry points ───────────────────────────────────────────────────────

/// Draw the status line below the canvas plus any overlay the phase needs.
pub fn draw<W: Write>(out: &mut W, layout: Layout, snap: &Snapshot) -> std::io::Result<()> {
    draw_status_line(out, layout, snap)?;

    if let Some(message) = &snap.error {
        draw_error_banner(out, layout, message)?;
    } else if let GamePhase::Ended(score) = snap.phase {
        draw_game_over(out, layout, score)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, layout.rows))?;
    out.flush()
}

/// Shown instead of the game when no surface could be created.
pub fn draw_unavailable<W: Write>(out: &mut W, err: &GameError) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_ERROR))?;
    out.queue(Print(format!("Error: {err}")))?;
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Q : Quit"))?;
    out.queue(style::ResetColor)?;
    out.flush()
}

// ── Status line ───────────────────────────────────────────────────────────────

fn draw_status_line<W: Write>(out: &mut W, layout: Layout, snap: &Snapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, layout.rows))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;

    let (text, color) = match snap.phase {
        GamePhase::NotStarted if snap.error.is_none() => (
            "Click the screen to start and keep the bird flying".to_string(),
            C_HINT,
        ),
        GamePhase::Running => (format!("Score: {}   {CONTROLS}", snap.score), C_SCORE),
        _ => (CONTROLS.to_string(), C_HINT),
    };
    out.queue(cursor::MoveTo(layout.left, layout.rows))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    layout: Layout,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = layout.left + layout.cols / 2;
    let start_row = (layout.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(style::SetBackgroundColor(Color::Black))?;
        out.queue(Print(*msg))?;
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, layout: Layout, score: u32) -> std::io::Result<()> {
    let score_line = format!("Your score: {score}");
    let lines: &[(&str, Color)] = &[
        ("╔══════════════╗", C_ERROR),
        ("║  GAME  OVER  ║", C_ERROR),
        ("╚══════════════╝", C_ERROR),
        (score_line.as_str(), C_SCORE),
        ("[R] Restart", C_PANEL),
    ];
    draw_centered(out, layout, lines)
}

fn draw_error_banner<W: Write>(out: &mut W, layout: Layout, message: &str) -> std::io::Result<()> {
    let banner = format!("Error: {message}");
    let lines: &[(&str, Color)] = &[(banner.as_str(), C_ERROR), ("[R] Restart", C_PANEL)];
    draw_centered(out, layout, lines)
}
