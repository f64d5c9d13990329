mod app;
mod cli;
mod config;
mod logging;
mod timer;
mod ui;

use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Load config before touching the terminal so errors print normally
    let mut cfg = config::load_config(cli.config.as_deref())?;
    cli.apply(&mut cfg);

    if let Some(path) = logging::init(&cfg.logging)? {
        info!(log = %path.display(), "pomotui starting");
    }
    info!(
        work_minutes = cfg.timer.work_minutes,
        pause_minutes = cfg.timer.pause_minutes,
        tick_rate_ms = cfg.ui.tick_rate_ms,
        "configuration loaded"
    );

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        error!("fatal: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    info!("pomotui exited");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms);

    let mut state = AppState::new(cfg);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    error!("terminal input error: {}", e);
                    break;
                }
                None => break,
            }
        }
    });

    // Spawn frame tick task; each tick advances the countdown
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick(Instant::now())).is_err() {
                break;
            }
        }
    });
    drop(event_tx);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.mark_drawn(Instant::now());

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);

        let now = Instant::now();
        for action in actions {
            handler::apply_action(&mut state, action, now);
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.mark_drawn(now);
        }
    }

    Ok(())
}
