mod chrome;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;

use flappy_gates::compute::init_state;
use flappy_gates::controller::{reset, snapshot, tap, tick, FrameRequest};
use flappy_gates::entities::GameState;
use flappy_gates::error::GameError;
use flappy_gates::render::render;
use flappy_gates::terminal::TerminalSurface;

/// One tick per display refresh, ≈60 Hz.
const FRAME: Duration = Duration::from_millis(16);

/// Terminal rows kept below the canvas for the status line.
const STATUS_ROWS: u16 = 1;

// ── Input ─────────────────────────────────────────────────────────────────────

enum Input {
    Tap,
    Restart,
    Quit,
    Resize(u16, u16),
}

fn classify(event: Event) -> Option<Input> {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) => match code {
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(Input::Tap),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Input::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Input::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..
        }) => Some(Input::Tap),
        Event::Resize(cols, rows) => Some(Input::Resize(cols, rows)),
        _ => None,
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw mode on the alternate screen, so logs go to a file.
fn init_logging() {
    let path = std::env::var_os("FLAPPY_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("flappy_gates.log"));

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match File::create(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
    log::info!("logging to {}", path.display());
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Redraw a frozen frame (after a resize while nothing is ticking).
fn redraw<W: Write>(surface: &mut TerminalSurface<W>, state: &mut GameState) -> Result<(), GameError> {
    if state.error.is_none() {
        if let Err(err) = render(surface, state) {
            log::error!("redraw failed: {err}");
            state.error = Some(err.to_string());
        }
    }
    let layout = surface.layout();
    chrome::draw(surface.writer(), layout, &snapshot(state))?;
    Ok(())
}

/// Acts as the frame scheduler: ticks once per frame while the last tick
/// asked to continue, and idles on input once it asked to stop.
fn game_loop<W: Write>(
    surface: &mut TerminalSurface<W>,
    rx: &mpsc::Receiver<Event>,
) -> Result<(), GameError> {
    let mut rng = thread_rng();
    let mut state = init_state();
    let mut request = FrameRequest::Continue;

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            match classify(event) {
                Some(Input::Quit) => return Ok(()),
                Some(Input::Tap) => tap(&mut state),
                Some(Input::Restart) if request == FrameRequest::Stop => {
                    reset(&mut state);
                    request = FrameRequest::Continue;
                }
                Some(Input::Resize(cols, rows)) => {
                    if let Err(err) = surface.resize(cols, rows.saturating_sub(STATUS_ROWS)) {
                        log::warn!("keeping previous canvas size: {err}");
                    }
                    surface
                        .writer()
                        .queue(terminal::Clear(terminal::ClearType::All))?;
                    if request == FrameRequest::Stop {
                        redraw(surface, &mut state)?;
                    }
                }
                Some(Input::Restart) | None => {}
            }
        }

        if request == FrameRequest::Continue {
            request = tick(&mut state, surface, &mut rng);
            let layout = surface.layout();
            chrome::draw(surface.writer(), layout, &snapshot(&state))?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

/// Block until a quit key arrives.
fn wait_for_quit(rx: &mpsc::Receiver<Event>) {
    while let Ok(event) = rx.recv() {
        if let Some(Input::Quit) = classify(event) {
            return;
        }
    }
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> Result<(), GameError> {
    let mut surface = match TerminalSurface::new(&mut *out, STATUS_ROWS) {
        Ok(surface) => surface,
        Err(err) => {
            log::error!("{err}");
            chrome::draw_unavailable(out, &err)?;
            wait_for_quit(rx);
            return Ok(());
        }
    };
    log::info!("canvas {:?}", surface.layout());
    game_loop(&mut surface, rx)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    init_logging();

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);
    drop(rx);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("exiting: {err}");
    }
    result
}
