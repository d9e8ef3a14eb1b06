use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Result};
use clap::Parser;
use tracing::Level;

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH, TICK_INTERVAL};

#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about = "A terminal falling-block puzzle game")]
pub struct Config {
    #[arg(long, default_value_t = BOARD_WIDTH, help = "Board width in cells")]
    pub width: usize,

    #[arg(long, default_value_t = BOARD_HEIGHT, help = "Board height in cells")]
    pub height: usize,

    #[arg(long, default_value_t = TICK_INTERVAL, help = "Gravity tick interval in milliseconds")]
    pub tick_ms: u64,

    #[arg(long, help = "Seed for a reproducible piece sequence")]
    pub seed: Option<u64>,

    #[arg(long, help = "Write logs to this file (the terminal is busy drawing the board)")]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tick_ms: TICK_INTERVAL,
            seed: None,
            log_file: None,
            verbose: 0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width >= MIN_BOARD_WIDTH,
            "board width must be at least {} cells, got {}",
            MIN_BOARD_WIDTH,
            self.width
        );
        ensure!(
            self.height >= MIN_BOARD_HEIGHT,
            "board height must be at least {} cells, got {}",
            MIN_BOARD_HEIGHT,
            self.height
        );
        ensure!(self.tick_ms > 0, "tick interval must be positive");
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
