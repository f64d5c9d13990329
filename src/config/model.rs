//! Configuration data model.
//!
//! All structs derive `Deserialize` for TOML; the file is only ever read.
//! Every field has a sensible default so the application works without a
//! config file.

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::timer::{clamp_minutes, DEFAULT_PAUSE_MINUTES, DEFAULT_WORK_MINUTES};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ui.tick_rate_ms must be greater than zero")]
    ZeroTickRate,
    #[error("logging.log_dir must be set when logging is enabled")]
    EmptyLogDir,
}

impl AppConfig {
    /// Reject values the app cannot run with. Interval lengths are clamped
    /// rather than rejected.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.logging.enabled && self.logging.log_dir.trim().is_empty() {
            return Err(ConfigError::EmptyLogDir);
        }
        self.timer.clamp();
        Ok(())
    }
}

/// Initial interval lengths, in minutes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default = "default_pause_minutes")]
    pub pause_minutes: u32,
}

impl TimerConfig {
    pub fn clamp(&mut self) {
        let work = clamp_minutes(self.work_minutes);
        if work != self.work_minutes {
            warn!(configured = self.work_minutes, used = work, "work_minutes out of range");
            self.work_minutes = work;
        }
        let pause = clamp_minutes(self.pause_minutes);
        if pause != self.pause_minutes {
            warn!(configured = self.pause_minutes, used = pause, "pause_minutes out of range");
            self.pause_minutes = pause;
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            pause_minutes: default_pause_minutes(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Frame interval in milliseconds; the countdown is advanced once per frame.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Show the wall-clock time in the status bar.
    #[serde(default = "default_true")]
    pub show_clock: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_clock: true,
        }
    }
}

/// Diagnostic logging. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"info"` or `"pomotui=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_work_minutes() -> u32 {
    DEFAULT_WORK_MINUTES
}

fn default_pause_minutes() -> u32 {
    DEFAULT_PAUSE_MINUTES
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

fn default_log_dir() -> String {
    "~/.local/share/pomotui/logs".into()
}

fn default_log_level() -> String {
    "info".into()
}
