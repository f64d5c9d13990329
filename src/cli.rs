//! Command-line flags. Values given here override the config file.

use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pomotui", version, about = "A Pomodoro work/pause timer for the terminal")]
pub struct Cli {
    /// Config file to read instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Work interval length in minutes
    #[arg(short, long, value_name = "MIN")]
    pub work: Option<u32>,

    /// Pause interval length in minutes
    #[arg(short, long, value_name = "MIN")]
    pub pause: Option<u32>,
}

impl Cli {
    /// Apply the duration overrides, clamping them like the config file.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(work) = self.work {
            config.timer.work_minutes = work;
        }
        if let Some(pause) = self.pause {
            config.timer.pause_minutes = pause;
        }
        config.timer.clamp();
    }
}
