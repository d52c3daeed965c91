//! Terminal 2048 runner (default binary).
//!
//! It uses crossterm for input (keys and mouse swipes) and the framebuffer
//! renderer from `tui_2048::term`. Logs go to a file; see `--log-dir`.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info, warn};

use tui_2048::config::GameConfig;
use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, handle_mouse_event, should_quit, SwipeTracker};
use tui_2048::logging;
use tui_2048::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, TilePalette, Viewport};

/// Input poll timeout; the loop only redraws on change.
const POLL_MS: u64 = 50;
/// Redraw an unchanged frame at most this often.
const STATIC_REDRAW_MS: u64 = 1000;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = GameConfig::from_env();
    config.apply_args(&args)?;

    let _guard = logging::init(&config.log_dir)?;
    for warning in &config.warnings {
        warn!("{warning}");
    }
    info!(dim = config.dim, seed = config.seed, cell_w = config.cell_w, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!(error = %e, "game loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = GameState::new(config.dim, config.seed).context("failed to start game")?;

    let view = GameView::new(config.cell_w, config.cell_h());
    let mut palette = TilePalette::new(config.dim, config.seed);
    let mut palette_episode = game.episode_id();

    let mut swipe = SwipeTracker::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let started = Instant::now();
    let (mut width, mut height) = crossterm::terminal::size().unwrap_or((80, 24));

    loop {
        game.snapshot_into(&mut snap);

        // New game, new colors.
        if snap.episode_id != palette_episode {
            palette_episode = snap.episode_id;
            let seed = config.seed.wrapping_add(u64::from(palette_episode));
            palette = TilePalette::new(snap.dim, seed);
        }

        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, &snap) {
            view.render_into(&snap, &palette, Viewport::new(width, height), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(score = game.score(), moves = game.moves(), "quit");
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => handle_mouse_event(&mut swipe, mouse),
            Event::Resize(w, h) => {
                width = w;
                height = h;
                term.invalidate();
                throttle.reset();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            let was_over = game.game_over();
            game.apply_action(action);
            if game.game_over() && !was_over {
                info!(
                    score = game.score(),
                    moves = game.moves(),
                    best_tile = game.board().max_tile(),
                    "game over"
                );
            }
        }
    }
}
