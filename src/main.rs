use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    fs::File,
    io::stdout,
    sync::Mutex,
    time::Instant,
};
use tracing::info;
use tracing_subscriber::prelude::*;

use blockfall::config::Config;
use blockfall::game::{Game, RandomSource};
use blockfall::input::{handle_input, InputAction};
use blockfall::ui::ui;

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(config.log_level()))
        .init();
    info!("Logging initialized at level: {}", config.log_level());
    Ok(())
}

// Keys and gravity ticks are funnelled through this one loop, so the game is
// only ever touched by a single caller at a time.
fn run<B: Backend>(terminal: &mut Terminal<B>, game: &mut Game, config: &Config) -> Result<()> {
    let tick_interval = config.tick_interval();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, &*game))?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match handle_input(key) {
                    Some(InputAction::Quit) => break,
                    Some(InputAction::Restart) => game.reset(),
                    Some(InputAction::Game(command)) => game.apply(command),
                    None => {}
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            game.on_tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_logging(&config)?;

    let source = match config.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::new(),
    };
    let mut game = Game::new(config.width, config.height, Box::new(source));
    info!(width = config.width, height = config.height, seed = ?config.seed, "starting game");

    // Setup terminal
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game, &config);

    // Cleanup runs even when the loop failed
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
