//! Terminal memory game runner (default binary).
//!
//! One single-threaded loop: poll crossterm input with a frame timeout,
//! route it to the controller, then feed the elapsed time into the
//! controller and the surface. Rendering is skipped when nothing changed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tui_memory::core::BoardGenerator;
use tui_memory::engine::{GameConfig, GameController, Phase, Surface};
use tui_memory::input::{should_quit, InputHandler};
use tui_memory::term::{
    BoardView, FrameBuffer, RenderThrottle, TermSurface, TerminalRenderer, Viewport,
};
use tui_memory::types::{InputEvent, FRAME_MS, MESSAGE_MS};

/// Full redraw at least this often even when nothing changed.
const REFRESH_MS: u64 = 1000;

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env()?;
    tracing::info!(?config, "configuration loaded");

    let generator = BoardGenerator::with_seed(config.seed);
    let view = BoardView::new(config.theme.clone());
    let mut controller = GameController::new(config, generator, TermSurface::new());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut controller, &view);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(summary) = controller.last_summary() {
        println!("{}", serde_json::to_string(summary)?);
    }
    result
}

/// Log to the file named by `MEMORY_LOG_PATH`; the terminal itself is busy.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("MEMORY_LOG_PATH") else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file)),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    controller: &mut GameController<TermSurface>,
    view: &BoardView,
) -> Result<()> {
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(REFRESH_MS);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let started = Instant::now();
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        // Render.
        {
            let surface = controller.surface();
            input.cursor_mut().fit(surface.rows(), surface.cols());
            let cursor = input.cursor().position();

            let cursor_bits = cursor.map_or(u64::from(u32::MAX), |p| {
                (u64::from(p.row) << 16) | u64::from(p.col)
            });
            let fingerprint = surface.fingerprint()
                ^ (u64::from(w) << 48)
                ^ (u64::from(h) << 32)
                ^ cursor_bits;

            let now_ms = started.elapsed().as_millis() as u64;
            if throttle.should_render(now_ms, fingerprint) {
                view.render_into(surface, cursor, viewport, &mut fb);
                term.draw(&fb)?;
            }
        }

        // Input with timeout until next tick.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let ev = event::read()?;
            match &ev {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
                    return Ok(());
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    match view.cell_at(controller.surface(), viewport, mouse.column, mouse.row) {
                        Some(pos) => {
                            input.cursor_mut().jump_to(pos);
                            dispatch(controller, InputEvent::CellActivated(pos));
                        }
                        None if controller.phase() == Phase::Ready => {
                            dispatch(controller, InputEvent::Start);
                        }
                        None => {}
                    }
                }
                _ => {}
            }

            let awaiting_start = controller.phase() == Phase::Ready;
            if let Some(event) = input.handle_event(&ev, awaiting_start) {
                dispatch(controller, event);
            }
        }

        // Tick.
        let now = Instant::now();
        let elapsed = now.duration_since(last_tick);
        if elapsed >= frame {
            last_tick = now;
            let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            controller.advance(ms);
            controller.surface_mut().tick(ms);
        }
    }
}

fn dispatch(controller: &mut GameController<TermSurface>, event: InputEvent) {
    if let Err(err) = controller.handle_input(event) {
        controller
            .surface_mut()
            .display_message(&format!("Cannot start: {err}"), MESSAGE_MS);
    }
}
